use crate::api::UserDirectory;

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) directory: UserDirectory,
    pub(crate) page_size: u32,
}
