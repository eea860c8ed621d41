use stagepass_core::HotelsService;

#[derive(Clone)]
pub struct AuthConfig {
    pub secret: String,
    pub expiration: u64,
}

#[derive(Clone)]
pub struct AppState {
    pub hotels: HotelsService,
    pub auth: AuthConfig,
}
