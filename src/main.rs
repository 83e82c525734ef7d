use shiftboard_backend::routes::make_app;
use std::error::Error;
use tokio::net::TcpListener;

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    let (app, addr) = make_app().await?;
    let listener = TcpListener::bind(addr).await?;
    println!("🚀 Server started successfully");
    axum::serve(listener, app).await?;
    Ok(())
}
