use crm_assist::config::Service;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    crm_assist::run(Service::EmailComposer).await
}
