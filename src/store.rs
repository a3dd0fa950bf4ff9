use crate::types::AppResult;
use crate::world::roster::{ExhibitionsData, GroupsData};
use anyhow::anyhow;
use include_dir::{include_dir, Dir};
use serde::Deserialize;
use std::fs::File;
use std::path::{Path, PathBuf};

pub static ASSETS_DIR: Dir = include_dir!("$CARGO_MANIFEST_DIR/assets/");

static GROUPS_FILENAME: &str = "data/groups.json";
static EXHIBITIONS_FILENAME: &str = "data/exhibitions.json";

pub fn store_path(filename: &str) -> AppResult<PathBuf> {
    let dirs = directories::ProjectDirs::from("org", "courtside", "tipoff")
        .ok_or(anyhow!("Failed to get directories"))?;
    let config_dirs = dirs.config_dir();
    if !config_dirs.exists() {
        std::fs::create_dir_all(config_dirs)?;
    }
    let path = config_dirs.join(filename);
    Ok(path)
}

fn load_embedded<T: for<'a> Deserialize<'a>>(filename: &str) -> AppResult<T> {
    let file = ASSETS_DIR
        .get_file(filename)
        .ok_or(anyhow!("Missing embedded asset {filename}"))?;
    let data = file
        .contents_utf8()
        .ok_or(anyhow!("Embedded asset {filename} is not valid UTF-8"))?;
    let parsed = serde_json::from_str(data)?;
    Ok(parsed)
}

fn load_from_json<T: for<'a> Deserialize<'a>>(path: &Path) -> AppResult<T> {
    let file = File::open(path)?;
    let data: T = serde_json::from_reader(file)?;
    Ok(data)
}

pub fn load_groups() -> AppResult<GroupsData> {
    load_embedded(GROUPS_FILENAME)
}

pub fn load_exhibitions() -> AppResult<ExhibitionsData> {
    load_embedded(EXHIBITIONS_FILENAME)
}

pub fn load_groups_from(path: &Path) -> AppResult<GroupsData> {
    load_from_json(path)
}

pub fn load_exhibitions_from(path: &Path) -> AppResult<ExhibitionsData> {
    load_from_json(path)
}
