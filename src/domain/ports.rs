use crate::utils::error::Result;

pub trait Storage: Send + Sync {
    fn read_file(&self, path: &str) -> impl std::future::Future<Output = Result<Vec<u8>>> + Send;
}

pub trait ConfigProvider: Send + Sync {
    fn bind_addr(&self) -> &str;
    fn dataset_path(&self) -> &str;
    fn delimiter(&self) -> u8;
    fn slider_step(&self) -> f64;
    fn slider_mark_interval(&self) -> f64;
}
