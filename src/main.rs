use mentormap_core::prelude::*;
use mentormap_core::query::engine::QueryEngine;
use mentormap_core::region::regions::DEFAULT_REGION_TABLE;
use mentormap_core::service::data_service::load_rows;
use mentormap_core::store::records::RecordStore;
use mentormap_core::util::log_service::set_logging;
use mentormap_core::util::var_service::{
    get_mentees_path, get_mentors_path, get_region_selection, get_role_selection,
};
use std::path::Path;

#[tokio::main]
async fn main() -> Result<()> {
    set_logging().await?;

    let mentor_rows = load_rows(Path::new(&get_mentors_path().await?)).await?;
    let mentee_rows = load_rows(Path::new(&get_mentees_path().await?)).await?;
    let store = RecordStore::build(&mentor_rows, &mentee_rows)?;
    tracing::info!("Built record store with {} records.", store.len());

    let role = get_role_selection().await?;
    let region = get_region_selection().await?;
    let engine = QueryEngine::new(&store, &DEFAULT_REGION_TABLE);
    let result = engine.query(&role, &region)?;
    tracing::info!(
        "{}s in {}: {} people across {} countries.",
        role,
        region,
        result.total_people,
        result.total_countries
    );
    println!("{}", serde_json::to_string_pretty(&result)?);

    Ok(())
}
