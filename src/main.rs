#[actix_web::main]
async fn main() -> std::io::Result<()> {
    restoscope_lib::run().await
}
