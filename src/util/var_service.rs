use crate::prelude::*;
use anyhow::anyhow;
use std::env::var;

pub async fn get_mentors_path() -> Result<String> {
    match var("MENTORS_PATH") {
        Ok(path) => match path.is_empty() {
            true => {
                let err = "MENTORS_PATH is empty";
                tracing::error!(err);
                Err(anyhow!(err))
            }
            false => Ok(path),
        },
        Err(_) => Ok("data/unique_mentors.json".to_string()),
    }
}

pub async fn get_mentees_path() -> Result<String> {
    match var("MENTEES_PATH") {
        Ok(path) => match path.is_empty() {
            true => {
                let err = "MENTEES_PATH is empty";
                tracing::error!(err);
                Err(anyhow!(err))
            }
            false => Ok(path),
        },
        Err(_) => Ok("data/unique_mentees.json".to_string()),
    }
}

pub async fn get_role_selection() -> Result<String> {
    match var("ROLE") {
        Ok(role) => match role.is_empty() {
            true => Ok("Mentor".to_string()),
            false => Ok(role),
        },
        Err(_) => Ok("Mentor".to_string()),
    }
}

pub async fn get_region_selection() -> Result<String> {
    match var("REGION") {
        Ok(region) => match region.is_empty() {
            true => Ok("ALL".to_string()),
            false => Ok(region),
        },
        Err(_) => Ok("ALL".to_string()),
    }
}
