use std::error::Error;
use std::net::{Ipv4Addr, SocketAddr};

use tokio::net::TcpListener;
use tracing::info;

use resume_api::configuration::get_static_configuration;
use resume_api::telemetry::{get_subscriber, init_subscriber};

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    let subscriber = get_subscriber("resume-api".into(), "info".into(), std::io::stdout);
    init_subscriber(subscriber)?;

    let configuration = get_static_configuration()?;
    let address = SocketAddr::from((Ipv4Addr::UNSPECIFIED, configuration.application_port));
    let state = resume_api::build_state(configuration).await?;

    let listener = TcpListener::bind(address).await?;
    info!("Starting server at {}...", address);

    resume_api::run(listener, state).await?;
    Ok(())
}
