//! Settings stored on disk, separate from tracker state.

use {
    std::{
        fs,
        io,
        path::PathBuf,
    },
    directories::ProjectDirs,
    serde::{
        Deserialize,
        Serialize,
    },
    smart_default::SmartDefault,
};

pub const VERSION: u8 = 0;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error(transparent)] Io(#[from] io::Error),
    #[error(transparent)] Json(#[from] serde_json::Error),
    #[error("could not find your user folder")]
    MissingHomeDir,
}

#[derive(Debug, SmartDefault, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Config {
    /// Whether bosses need their big key when the tracker starts or is reset.
    #[serde(default)]
    pub big_key_visible: bool,
    /// The storage key the layout is saved under.
    #[default(default_layout_key())]
    #[serde(default = "default_layout_key")]
    pub layout_key: String,
    /// Format version of the file. Files written by a newer tracker are read as far as possible and rewritten at [`VERSION`].
    #[default(VERSION)]
    pub version: u8,
}

impl Config {
    /// If the config file doesn't exist, this returns `Ok(None)`.
    pub fn load() -> Result<Option<Self>, Error> {
        Self::load_from(path()?)
    }

    pub fn load_from(path: PathBuf) -> Result<Option<Self>, Error> {
        let buf = match fs::read_to_string(path) {
            Ok(buf) => buf,
            Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(e.into()),
        };
        let mut config = serde_json::from_str::<Self>(&buf)?;
        if config.version != VERSION {
            log::warn!("config file has format version {}, this tracker uses {}", config.version, VERSION);
            config.version = VERSION;
        }
        Ok(Some(config))
    }

    pub fn save(&self) -> Result<(), Error> {
        self.save_to(path()?)
    }

    pub fn save_to(&self, path: PathBuf) -> Result<(), Error> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(path, serde_json::to_vec_pretty(self)?)?;
        Ok(())
    }
}

pub(crate) fn dirs() -> Result<ProjectDirs, Error> {
    ProjectDirs::from("net", "z3tracker", "Z3 Tracker").ok_or(Error::MissingHomeDir)
}

fn path() -> Result<PathBuf, Error> {
    Ok(dirs()?.config_dir().join("config.json"))
}

fn default_layout_key() -> String { format!("layout") }
