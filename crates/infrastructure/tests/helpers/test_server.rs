#![allow(dead_code)]
use hickory_proto::op::{Message, MessageType, OpCode, Query};
use hickory_proto::rr::{Name, RecordType as HickoryRecordType};
use hickory_server::ServerFuture;
use redis_dns_application::ports::RecordStore;
use redis_dns_application::use_cases::HandleQuestionUseCase;
use redis_dns_domain::{parse_records, Association};
use redis_dns_infrastructure::dns::DnsServerHandler;
use std::net::SocketAddr;
use std::str::FromStr;
use std::sync::Arc;
use std::time::Duration;
use tokio::net::UdpSocket;
use tokio::task::JoinHandle;

/// UDP server on an ephemeral loopback port, torn down on drop.
pub struct TestServer {
    pub addr: SocketAddr,
    task: JoinHandle<()>,
}

impl TestServer {
    pub async fn start(store: Arc<dyn RecordStore>) -> Self {
        let use_case = Arc::new(HandleQuestionUseCase::new(
            store,
            Duration::from_millis(200),
            8,
        ));
        let handler = DnsServerHandler::new(use_case);

        let socket = UdpSocket::bind("127.0.0.1:0").await.unwrap();
        let addr = socket.local_addr().unwrap();

        let mut server = ServerFuture::new(handler);
        server.register_socket(socket);
        let task = tokio::spawn(async move {
            let _ = server.block_until_done().await;
        });

        Self { addr, task }
    }
}

impl Drop for TestServer {
    fn drop(&mut self) {
        self.task.abort();
    }
}

/// Writes the records described by an admin command line.
pub async fn seed(store: &dyn RecordStore, line: &str) {
    let tokens: Vec<&str> = line.split_whitespace().collect();
    let associations: Vec<Association> = parse_records(&tokens)
        .iter()
        .flat_map(|record| record.associations())
        .collect();
    for association in &associations {
        store.apply(association).await.unwrap();
    }
}

pub async fn query_udp(addr: SocketAddr, name: &str, record_type: HickoryRecordType) -> Message {
    let mut request = Message::new();
    request
        .set_id(4242)
        .set_message_type(MessageType::Query)
        .set_op_code(OpCode::Query)
        .set_recursion_desired(true)
        .add_query(Query::query(Name::from_str(name).unwrap(), record_type));

    let socket = UdpSocket::bind("127.0.0.1:0").await.unwrap();
    socket
        .send_to(&request.to_vec().unwrap(), addr)
        .await
        .unwrap();

    let mut buf = vec![0u8; 4096];
    let (len, _) = tokio::time::timeout(Duration::from_secs(5), socket.recv_from(&mut buf))
        .await
        .expect("no response within 5s")
        .unwrap();

    Message::from_vec(&buf[..len]).unwrap()
}
