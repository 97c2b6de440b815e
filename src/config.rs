#[derive(Clone, Debug)]
pub struct BitacoraConfig {
    pub cms_api_url: String,
    pub cms_access_token: Option<String>,
    pub document_type: String,
    pub bind_addr: String,
    pub revalidate_secs: u64,
}

impl BitacoraConfig {
    pub fn from_env() -> Self {
        let cms_api_url = std::env::var("CMS_API_URL")
            .expect("Failed to determine CMS_API_URL from environment variables");

        let cms_access_token = std::env::var("CMS_ACCESS_TOKEN").ok();

        let document_type =
            std::env::var("CMS_DOCUMENT_TYPE").unwrap_or_else(|_| "posts".to_string());

        let bind_addr = std::env::var("BIND_ADDR").unwrap_or_else(|_| "0.0.0.0:3000".to_string());

        // 3 hours, matching the revalidation window of the statically served pages
        let revalidate_secs = std::env::var("REVALIDATE_SECS")
            .ok()
            .and_then(|val| val.parse::<u64>().ok())
            .unwrap_or(60 * 60 * 3);

        Self {
            cms_api_url,
            cms_access_token,
            document_type,
            bind_addr,
            revalidate_secs,
        }
    }
}
