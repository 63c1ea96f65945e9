pub mod prelude;
pub mod query {
    pub mod engine;
}
pub mod region {
    pub mod regions;
}
pub mod service {
    pub mod data_service;
}
pub mod store {
    pub mod records;
}
pub mod util {
    pub mod log_service;
    pub mod var_service;
}
