use super::Repositories;
use ledger_dns_api::AppState;
use ledger_dns_application::services::{QueryResolver, ResponseSynthesizer};
use ledger_dns_application::use_cases::{
    CreateRecordUseCase, DeleteRecordUseCase, GetRecordsUseCase, HandleDnsQueryUseCase,
    UpdateRecordUseCase,
};
use ledger_dns_domain::config::DnsConfig;
use ledger_dns_domain::Config;
use ledger_dns_infrastructure::dns::{DnsServerHandler, TracingMalformedRecordReporter};
use std::sync::Arc;
use std::time::Duration;

pub struct UseCases {
    pub handle_dns_query: Arc<HandleDnsQueryUseCase>,
    pub get_records: Arc<GetRecordsUseCase>,
    pub create_record: Arc<CreateRecordUseCase>,
    pub update_record: Arc<UpdateRecordUseCase>,
    pub delete_record: Arc<DeleteRecordUseCase>,
}

impl UseCases {
    pub fn new(config: &Config, repos: &Repositories) -> Self {
        let resolver = Arc::new(QueryResolver::new(repos.record.clone()));
        let synthesizer = Arc::new(ResponseSynthesizer::new(
            config.dns.response_policy(),
            Arc::new(TracingMalformedRecordReporter),
        ));

        Self {
            handle_dns_query: Arc::new(HandleDnsQueryUseCase::new(resolver, synthesizer)),
            get_records: Arc::new(GetRecordsUseCase::new(repos.record.clone())),
            create_record: Arc::new(CreateRecordUseCase::new(repos.record.clone())),
            update_record: Arc::new(UpdateRecordUseCase::new(repos.record.clone())),
            delete_record: Arc::new(DeleteRecordUseCase::new(repos.record.clone())),
        }
    }

    pub fn dns_handler(&self, dns: &DnsConfig) -> DnsServerHandler {
        DnsServerHandler::new(
            self.handle_dns_query.clone(),
            Duration::from_millis(dns.query_timeout_ms),
        )
    }

    pub fn app_state(&self) -> AppState {
        AppState {
            get_records: self.get_records.clone(),
            create_record: self.create_record.clone(),
            update_record: self.update_record.clone(),
            delete_record: self.delete_record.clone(),
        }
    }
}
