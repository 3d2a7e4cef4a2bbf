use ledger_dns_application::use_cases::{
    CreateRecordUseCase, DeleteRecordUseCase, GetRecordsUseCase, UpdateRecordUseCase,
};
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    pub get_records: Arc<GetRecordsUseCase>,
    pub create_record: Arc<CreateRecordUseCase>,
    pub update_record: Arc<UpdateRecordUseCase>,
    pub delete_record: Arc<DeleteRecordUseCase>,
}
