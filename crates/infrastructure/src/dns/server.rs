use crate::dns::AnswerMapper;
use hickory_proto::op::{Header, ResponseCode};
use hickory_proto::rr::Record;
use hickory_server::authority::MessageResponseBuilder;
use hickory_server::server::{Request, RequestHandler, ResponseHandler, ResponseInfo};
use ledger_dns_application::use_cases::HandleDnsQueryUseCase;
use ledger_dns_domain::DomainError;
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, error, info, warn};

pub struct DnsServerHandler {
    use_case: Arc<HandleDnsQueryUseCase>,
    query_timeout: Duration,
}

impl DnsServerHandler {
    pub fn new(use_case: Arc<HandleDnsQueryUseCase>, query_timeout: Duration) -> Self {
        Self {
            use_case,
            query_timeout,
        }
    }
}

#[async_trait::async_trait]
impl RequestHandler for DnsServerHandler {
    async fn handle_request<R: ResponseHandler>(
        &self,
        request: &Request,
        mut response_handle: R,
    ) -> ResponseInfo {
        let query = AnswerMapper::to_query(request.queries().iter().map(|q| q.original()));
        let client_ip = request.src().ip();

        info!(
            questions = query.questions.len(),
            client = %client_ip,
            "DNS query received"
        );

        let reply = match tokio::time::timeout(self.query_timeout, self.use_case.execute(&query))
            .await
        {
            Ok(reply) => reply,
            Err(_) => {
                warn!(
                    client = %client_ip,
                    timeout_ms = self.query_timeout.as_millis() as u64,
                    error = %DomainError::QueryTimeout,
                    "Query deadline exceeded"
                );
                return send_error_response(request, &mut response_handle, ResponseCode::ServFail)
                    .await;
            }
        };

        let answers: Vec<Record> = reply
            .answers
            .iter()
            .filter_map(|entry| match AnswerMapper::to_hickory(entry) {
                Ok(record) => Some(record),
                Err(e) => {
                    warn!(error = %e, "Skipping answer that cannot be encoded");
                    None
                }
            })
            .collect();

        debug!(answers = answers.len(), "Sending response");

        let mut header = Header::response_from_request(request.header());
        header.set_authoritative(reply.authoritative);

        let builder = MessageResponseBuilder::from_message_request(request);
        let response = builder.build(header, answers.iter(), &[], &[], &[]);

        match response_handle.send_response(response).await {
            Ok(info) => info,
            Err(e) => {
                let failure = DomainError::TransportSendFailure(e.to_string());
                error!(client = %client_ip, error = %failure, "Failed to send response");
                ResponseInfo::from(header)
            }
        }
    }
}

async fn send_error_response<R: ResponseHandler>(
    request: &Request,
    response_handle: &mut R,
    code: ResponseCode,
) -> ResponseInfo {
    debug!(code = ?code, "Sending error response");
    let builder = MessageResponseBuilder::from_message_request(request);
    let mut header = Header::response_from_request(request.header());
    header.set_response_code(code);
    let response = builder.build(header, &[], &[], &[], &[]);

    match response_handle.send_response(response).await {
        Ok(info) => info,
        Err(e) => {
            error!(error = %e, "Failed to send error response");
            ResponseInfo::from(header)
        }
    }
}
