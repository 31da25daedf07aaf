/// URL base de la API de objetos
/// Sobrescribible en tiempo de compilación con OBJECTS_API_URL (ver build.rs)
pub const DEFAULT_OBJECTS_API_URL: &str = "https://api.restful-api.dev";

/// Ruta del recurso de creación
pub const OBJECTS_PATH: &str = "/objects";

/// Año mínimo aceptado por el formulario "add object"
pub const DEFAULT_OBJECT_MIN_YEAR: i32 = 1900;

/// Año mínimo aceptado por el formulario "add computer"
pub const DEFAULT_COMPUTER_MIN_YEAR: i32 = 1970;
