use clap::Args;
use facegate_app::{
    database::Db,
    domain::visitors::{PgVisitorsService, VisitorsService},
};

#[derive(Debug, Args)]
pub(crate) struct ListVisitsArgs {
    /// PostgreSQL connection string
    #[arg(long, env = "DATABASE_URL", hide_env_values = true)]
    database_url: String,

    /// Only print the most recent visits
    #[arg(long)]
    limit: Option<usize>,
}

pub(crate) async fn run(args: ListVisitsArgs) -> Result<(), String> {
    let pool = crate::cli::connect(&args.database_url).await?;

    let visits = PgVisitorsService::new(Db::new(pool))
        .list_visits()
        .await
        .map_err(|error| format!("failed to list visits: {error}"))?;

    if visits.is_empty() {
        println!("no visits recorded");
        return Ok(());
    }

    for visit in visits.into_iter().take(args.limit.unwrap_or(usize::MAX)) {
        println!("visitor_id: {}", visit.uuid);
        println!("visited_at: {}", visit.visited_at);
        println!("attendance: {}", visit.attendance);
        println!(
            "face_token: {}",
            visit
                .face_token
                .map_or_else(|| "none".to_string(), |token| token.to_string())
        );

        if let Some(identity) = visit.identity {
            println!("employee_id: {}", identity.person_id);
            println!("name: {} {}", identity.first_name, identity.last_name);
        }

        println!("image_bytes: {}", visit.image_data.len());
        println!();
    }

    Ok(())
}
