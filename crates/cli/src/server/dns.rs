use hickory_server::ServerFuture;
use redis_dns_application::ports::RecordStore;
use redis_dns_application::use_cases::HandleQuestionUseCase;
use redis_dns_domain::Config;
use redis_dns_infrastructure::dns::DnsServerHandler;
use socket2::{Domain, Protocol, Socket, Type};
use std::net::{IpAddr, SocketAddr};
use std::sync::Arc;
use std::time::Duration;
use tokio::net::{TcpListener, UdpSocket};
use tracing::info;

/// Serves until SIGINT/SIGTERM, then drains in-flight requests.
pub async fn run_dns_server(config: &Config, store: Arc<dyn RecordStore>) -> anyhow::Result<()> {
    let bind_ip: IpAddr = config.server.bind_address.parse()?;
    let domain = if bind_ip.is_ipv4() {
        Domain::IPV4
    } else {
        Domain::IPV6
    };

    let use_case = Arc::new(HandleQuestionUseCase::new(
        store,
        config.store.timeout(),
        config.resolution.max_cname_depth,
    ));
    let mut server = ServerFuture::new(DnsServerHandler::new(use_case));

    if config.server.udp_port != 0 {
        let addr = SocketAddr::new(bind_ip, config.server.udp_port);
        server.register_socket(create_udp_socket(domain, addr)?);
        info!(bind_address = %addr, "UDP listener ready");
    }

    if config.server.tcp_port != 0 {
        let addr = SocketAddr::new(bind_ip, config.server.tcp_port);
        server.register_listener(
            create_tcp_listener(domain, addr)?,
            Duration::from_secs(config.server.tcp_timeout_secs),
        );
        info!(bind_address = %addr, "TCP listener ready");
    }

    let signal = shutdown_signal().await?;
    info!(signal, "Shutting down DNS server");

    server.shutdown_gracefully().await?;
    Ok(())
}

#[cfg(unix)]
async fn shutdown_signal() -> anyhow::Result<&'static str> {
    use tokio::signal::unix::{signal, SignalKind};

    let mut sigterm = signal(SignalKind::terminate())?;
    tokio::select! {
        result = tokio::signal::ctrl_c() => {
            result?;
            Ok("SIGINT")
        }
        _ = sigterm.recv() => Ok("SIGTERM"),
    }
}

#[cfg(not(unix))]
async fn shutdown_signal() -> anyhow::Result<&'static str> {
    tokio::signal::ctrl_c().await?;
    Ok("SIGINT")
}

fn create_udp_socket(domain: Domain, socket_addr: SocketAddr) -> anyhow::Result<UdpSocket> {
    let socket = Socket::new(domain, Type::DGRAM, Some(Protocol::UDP))?;
    if socket_addr.is_ipv6() {
        socket.set_only_v6(false)?;
    }
    socket.set_reuse_address(true)?;
    socket.set_recv_buffer_size(512 * 1024)?;
    socket.bind(&socket_addr.into())?;
    socket.set_nonblocking(true)?;
    let std_socket: std::net::UdpSocket = socket.into();
    Ok(UdpSocket::from_std(std_socket)?)
}

fn create_tcp_listener(domain: Domain, socket_addr: SocketAddr) -> anyhow::Result<TcpListener> {
    let socket = Socket::new(domain, Type::STREAM, Some(Protocol::TCP))?;
    if socket_addr.is_ipv6() {
        socket.set_only_v6(false)?;
    }
    socket.set_reuse_address(true)?;
    socket.bind(&socket_addr.into())?;
    socket.listen(1024)?;
    socket.set_nonblocking(true)?;
    let std_listener: std::net::TcpListener = socket.into();
    Ok(TcpListener::from_std(std_listener)?)
}
