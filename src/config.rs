use serde::Deserialize;
use std::error::Error;
use std::fs;
use std::path::Path;

use cubist_geom::Vec3;
use cubist_mesh_cpu::MeshOptions;

#[derive(Clone, Debug, Default, Deserialize)]
pub struct CubistConfig {
    #[serde(default)]
    pub mesh: MeshSection,
}

#[derive(Clone, Debug, Deserialize)]
pub struct MeshSection {
    #[serde(default = "default_scale")]
    pub scale: [f32; 3],
    #[serde(default)]
    pub parallel: bool,
}

fn default_scale() -> [f32; 3] {
    [1.0, 1.0, 1.0]
}

impl Default for MeshSection {
    fn default() -> Self {
        Self {
            scale: default_scale(),
            parallel: false,
        }
    }
}

impl MeshSection {
    pub fn to_options(&self) -> MeshOptions {
        let [x, y, z] = self.scale;
        MeshOptions {
            scale: Vec3::new(x, y, z),
            parallel: self.parallel,
        }
    }
}

pub fn from_toml_str(toml_str: &str) -> Result<CubistConfig, Box<dyn Error>> {
    Ok(toml::from_str(toml_str)?)
}

pub fn load_config_from_path(path: &Path) -> Result<CubistConfig, Box<dyn Error>> {
    let s = fs::read_to_string(path)?;
    from_toml_str(&s)
}
