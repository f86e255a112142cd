use serverlib_codec::{HttpResponse, Response};
use serverlib_core::{
    Server, ServerConfig, ServerImpl, ServerLibError, ServerRegistry, DEFAULT_SERVER_ID,
};

/// Stand-in server that only reports where it would listen.
struct ConsoleServer {
    config: ServerConfig,
}

impl From<ServerConfig> for ConsoleServer {
    fn from(config: ServerConfig) -> Self {
        Self { config }
    }
}

impl Server for ConsoleServer {
    fn start(&self) -> Result<(), ServerLibError> {
        tracing::info!("ConsoleServer: would listen on {}", self.config.bind_address());
        Ok(())
    }

    fn name(&self) -> &str {
        &self.config.server_name
    }
}

#[derive(Default)]
struct HealthServer;

impl Server for HealthServer {
    fn start(&self) -> Result<(), ServerLibError> {
        tracing::info!("HealthServer: ready");
        Ok(())
    }
}

impl ServerImpl for HealthServer {
    const SERVER_ID: &'static str = "health-probe";
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt::init();

    let config = ServerConfig::from_toml_str(
        r#"
        host = "127.0.0.1"
        port = 8081
        server_name = "console"
        "#,
    )?;

    let mut registry = ServerRegistry::new();
    registry.register_with::<ConsoleServer, _>(DEFAULT_SERVER_ID, config.clone());
    registry.register_impl::<HealthServer>();

    let server = registry
        .get_default_server()
        .ok_or("no server registered")?;
    server.start()?;

    let mut response = HttpResponse::new(DEFAULT_SERVER_ID, "hello from serverlib");
    response.set_header("Server", &config.server_name);

    println!("default server: {}", server.name());
    println!("{}", response.to_http_string());
    Ok(())
}
