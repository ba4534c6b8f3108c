#[rocket::main]
async fn main() -> Result<(), rocket::Error> {
    let _ = catalog_api::rocket().launch().await?;
    Ok(())
}
