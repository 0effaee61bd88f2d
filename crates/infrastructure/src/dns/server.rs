use crate::dns::answer_records::answer_records;
use crate::dns::record_type_map::RecordTypeMapper;
use hickory_proto::op::Header;
use hickory_proto::rr::{Record, RecordType as HickoryRecordType};
use hickory_server::authority::MessageResponseBuilder;
use hickory_server::server::{Request, RequestHandler, ResponseHandler, ResponseInfo};
use redis_dns_application::use_cases::HandleQuestionUseCase;
use redis_dns_domain::{Answer, Question};
use std::sync::Arc;
use tracing::{debug, error, warn};

/// Answers every request exactly once.
///
/// Requests that cannot be turned into a [`Question`] (undecodable query,
/// record type the store does not hold) get the same empty `NOERROR`
/// response as names with no records.
#[derive(Clone)]
pub struct DnsServerHandler {
    use_case: Arc<HandleQuestionUseCase>,
}

impl DnsServerHandler {
    pub fn new(use_case: Arc<HandleQuestionUseCase>) -> Self {
        Self { use_case }
    }

    async fn answers_for(&self, request: &Request) -> Vec<Answer> {
        let request_info = match request.request_info() {
            Ok(info) => info,
            Err(e) => {
                warn!(error = %e, client = %request.src(), "Failed to parse request info");
                return Vec::new();
            }
        };

        let query = request_info.query;
        match question_from_query(&query.name().to_string(), query.query_type()) {
            Some(question) => self.use_case.execute(&question).await,
            None => Vec::new(),
        }
    }
}

/// Builds the question for a decoded query, or `None` when its type is not
/// served.
pub fn question_from_query(name: &str, query_type: HickoryRecordType) -> Option<Question> {
    let Some(record_type) = RecordTypeMapper::from_hickory(query_type) else {
        debug!(record_type = ?query_type, name = %name, "Unsupported record type");
        return None;
    };

    Some(Question::new(name, record_type))
}

#[async_trait::async_trait]
impl RequestHandler for DnsServerHandler {
    async fn handle_request<R: ResponseHandler>(
        &self,
        request: &Request,
        mut response_handle: R,
    ) -> ResponseInfo {
        let answers = self.answers_for(request).await;
        let records = answer_records(&answers);

        let builder = MessageResponseBuilder::from_message_request(request);
        let mut header = Header::response_from_request(request.header());
        header.set_authoritative(true);
        let response = builder.build(
            header,
            records.iter(),
            &[] as &[Record],
            &[] as &[Record],
            &[] as &[Record],
        );

        match response_handle.send_response(response).await {
            Ok(info) => info,
            Err(e) => {
                error!(error = %e, "Failed to send response");
                ResponseInfo::from(header)
            }
        }
    }
}
