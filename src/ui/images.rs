use directories::ProjectDirs;
use log::{info, warn};
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::{LazyLock, Mutex};

pub const PLAYER_PROFILE_IMAGE_FOLDER_NAME: &str = "PlayerProfileImages";

const IMAGE_EXTENSIONS: &[&str] = &["png", "jpg"];

// Process-wide relative-to-absolute path table. Populated once, read many
// times; `None` means no scan has happened yet.
static IMAGE_PATHS: LazyLock<Mutex<Option<HashMap<String, PathBuf>>>> =
    LazyLock::new(|| Mutex::new(None));

/// Resolution result for a player profile image. `Fallback` tells the
/// renderer to use its built-in placeholder sprite.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProfileImage {
    File(PathBuf),
    Fallback,
}

/// The folders searched for profile images: the bundled assets folder next
/// to the executable and the per-user data directory.
pub fn default_image_folders() -> Vec<PathBuf> {
    let mut folders = vec![PathBuf::from(PLAYER_PROFILE_IMAGE_FOLDER_NAME)];
    if let Some(dirs) = ProjectDirs::from("", "", "melisma") {
        folders.push(dirs.data_dir().join(PLAYER_PROFILE_IMAGE_FOLDER_NAME));
    }
    folders
}

/// Populate the path table from `folders`. A second call is a no-op; the
/// table is scanned once per process.
pub fn scan(folders: &[PathBuf]) {
    let mut guard = IMAGE_PATHS.lock().unwrap();
    if guard.is_some() {
        return;
    }
    let map = build_image_path_map(folders);
    info!("Found {} player profile image(s)", map.len());
    *guard = Some(map);
}

fn build_image_path_map(folders: &[PathBuf]) -> HashMap<String, PathBuf> {
    let mut map = HashMap::new();
    for folder in folders {
        if !folder.is_dir() {
            continue;
        }
        let mut files = Vec::new();
        collect_image_files(folder, &mut files);
        for absolute in files {
            let Ok(relative) = absolute.strip_prefix(folder) else {
                continue;
            };
            map.insert(normalize_path(&relative.to_string_lossy()), absolute);
        }
    }
    map
}

fn collect_image_files(dir: &Path, out: &mut Vec<PathBuf>) {
    let Ok(entries) = std::fs::read_dir(dir) else {
        warn!("Cannot read image folder '{}'", dir.display());
        return;
    };
    for entry in entries.flatten() {
        let path = entry.path();
        if path.is_dir() {
            collect_image_files(&path, out);
        } else if path
            .extension()
            .and_then(|ext| ext.to_str())
            .is_some_and(|ext| {
                IMAGE_EXTENSIONS
                    .iter()
                    .any(|known| ext.eq_ignore_ascii_case(known))
            })
        {
            out.push(path);
        }
    }
}

// Lowercased forward-slash form so relative paths compare the same across
// platforms and user input.
fn normalize_path(path: &str) -> String {
    path.trim().replace('\\', "/").to_lowercase()
}

/// Resolve a relative profile image path against the scanned table. Empty
/// paths and unknown paths yield `Fallback`; unknown paths are logged.
pub fn resolve(image_path: &str) -> ProfileImage {
    if image_path.trim().is_empty() {
        return ProfileImage::Fallback;
    }

    {
        let mut guard = IMAGE_PATHS.lock().unwrap();
        if guard.is_none() {
            let map = build_image_path_map(&default_image_folders());
            info!("Found {} player profile image(s)", map.len());
            *guard = Some(map);
        }
    }

    let guard = IMAGE_PATHS.lock().unwrap();
    let map = guard.as_ref().expect("image path table populated above");
    match resolve_in(map, image_path) {
        Some(path) => ProfileImage::File(path),
        None => {
            warn!(
                "Cannot load player profile image '{image_path}', no corresponding image file found."
            );
            ProfileImage::Fallback
        }
    }
}

fn resolve_in(map: &HashMap<String, PathBuf>, image_path: &str) -> Option<PathBuf> {
    let wanted = normalize_path(image_path);
    if let Some(path) = map.get(&wanted) {
        return Some(path.clone());
    }
    // Also accept longer stored paths that end with the requested one, so a
    // bare file name still finds an image inside a subfolder.
    map.iter()
        .find(|(relative, _)| relative.ends_with(&wanted))
        .map(|(_, path)| path.clone())
}

pub fn relative_paths() -> Vec<String> {
    IMAGE_PATHS
        .lock()
        .unwrap()
        .as_ref()
        .map(|map| map.keys().cloned().collect())
        .unwrap_or_default()
}

pub fn absolute_paths() -> Vec<PathBuf> {
    IMAGE_PATHS
        .lock()
        .unwrap()
        .as_ref()
        .map(|map| map.values().cloned().collect())
        .unwrap_or_default()
}

/// Drop the scanned table so the next `scan`/`resolve` repopulates it.
#[cfg(test)]
fn reset() {
    *IMAGE_PATHS.lock().unwrap() = None;
}
