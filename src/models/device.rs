use serde::{Deserialize, Serialize};

/// Body de `POST /objects`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct NewObjectRequest {
    pub name: String,
    pub data: ObjectData,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ObjectData {
    pub year: i32,
    pub price: f64,
    #[serde(rename = "CPU model")]
    pub cpu_model: String,
    #[serde(rename = "Hard disk size")]
    pub hard_disk_size: String,
}

/// Respuesta de la API tras crear el objeto
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CreatedObject {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub created_at: Option<String>,
    #[serde(default)]
    pub data: Option<serde_json::Value>,
}

impl CreatedObject {
    /// Interpreta el body de una respuesta 2xx; `None` si no tiene la forma esperada
    pub fn from_body(body: &str) -> Option<Self> {
        match serde_json::from_str(body) {
            Ok(created) => Some(created),
            Err(e) => {
                log::warn!("⚠️ Respuesta 2xx sin objeto reconocible: {}", e);
                None
            }
        }
    }
}
