use clap::Args;
use facegate_app::{
    database::Db,
    domain::identities::{IdentitiesService, PgIdentitiesService},
};

#[derive(Debug, Args)]
pub(crate) struct ListIdentitiesArgs {
    /// PostgreSQL connection string
    #[arg(long, env = "DATABASE_URL", hide_env_values = true)]
    database_url: String,
}

pub(crate) async fn run(args: ListIdentitiesArgs) -> Result<(), String> {
    let pool = crate::cli::connect(&args.database_url).await?;

    let identities = PgIdentitiesService::new(Db::new(pool))
        .list_identities()
        .await
        .map_err(|error| format!("failed to list identities: {error}"))?;

    if identities.is_empty() {
        println!("no identities enrolled");
        return Ok(());
    }

    for identity in identities {
        println!("employee_id: {}", identity.person_id);
        println!("name: {} {}", identity.first_name, identity.last_name);
        println!("contact_number: {}", identity.contact_number);
        println!("face_token: {}", identity.face_token);
        println!("image_ref: {}", identity.image_ref);
        println!("created_at: {}", identity.created_at);
        println!();
    }

    Ok(())
}
