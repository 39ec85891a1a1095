//! User-facing error messages.
//!
//! Every failure that crosses the use-case boundary carries one of these
//! strings. They are kept in one place so the HTTP layer, the use-cases and
//! the tests agree on the exact wording.

// ---------------------------------------------------------------------------
// Authentication
// ---------------------------------------------------------------------------

pub const NOT_AUTHENTICATED: &str = "Usuario no autenticado";
pub const INVALID_CREDENTIALS: &str = "Correo o contraseña incorrectos";
pub const INVALID_TOKEN: &str = "Token inválido o expirado";
pub const MISSING_AUTH_HEADER: &str = "Falta la cabecera Authorization";
pub const INVALID_AUTH_FORMAT: &str = "Formato de Authorization inválido. Se espera: Bearer <token>";
pub const EMAIL_TAKEN: &str = "Ya existe una cuenta con ese correo";

// ---------------------------------------------------------------------------
// Authorization
// ---------------------------------------------------------------------------

pub const NOT_ASSIGNED: &str = "No estás asignado a esta versión del curso";
pub const ADMIN_ONLY: &str = "Solo los administradores pueden realizar esta acción";
pub const PUBLISH_ADMIN_ONLY: &str = "Solo los administradores pueden publicar versiones";
pub const ARCHIVE_ADMIN_ONLY: &str = "Solo los administradores pueden archivar versiones";
pub const STUDENT_READ_ONLY: &str = "Los estudiantes solo pueden consultar el contenido";
pub const CONTENT_NOT_AVAILABLE: &str = "Este contenido no está disponible";
pub const NOT_COMMENT_AUTHOR: &str = "Solo el autor puede editar este comentario";
pub const CANNOT_DEMOTE_SELF: &str = "No puedes cambiar tu propio rol de administrador";

// ---------------------------------------------------------------------------
// Version workflow
// ---------------------------------------------------------------------------

pub const ONLY_DRAFT_PUBLISHABLE: &str = "Solo se pueden publicar versiones en borrador";
pub const ONLY_PUBLISHED_ARCHIVABLE: &str = "Solo se pueden archivar versiones publicadas";
pub const VERSION_NOT_EDITABLE: &str = "Solo se puede modificar el contenido de versiones en borrador";
pub const NO_ACTIVE_VERSION: &str = "El curso no tiene una versión activa";
pub const VERSION_LABEL_TAKEN: &str = "Ya existe una versión con esa etiqueta en el curso";
pub const VERSION_NOT_IN_COURSE: &str = "La versión no pertenece a este curso";

// ---------------------------------------------------------------------------
// Content
// ---------------------------------------------------------------------------

pub const SLUG_TAKEN: &str = "Ya existe un curso con ese identificador";
pub const NOT_A_TEACHER: &str = "El usuario indicado no es profesor";
pub const ALREADY_ASSIGNED: &str = "El profesor ya está asignado a esta versión";
pub const TOPIC_NOT_IN_COURSE: &str = "El tema no pertenece a este curso";
pub const EXTERNAL_URL_ON_FILE: &str = "Solo los recursos de tipo enlace admiten una URL externa";
pub const ASSIGNMENT_NOT_FOUND: &str = "El profesor no está asignado a esta versión";

// ---------------------------------------------------------------------------
// Infrastructure
// ---------------------------------------------------------------------------

pub const UNEXPECTED_ERROR: &str = "Ha ocurrido un error inesperado";
pub const STORAGE_UPLOAD_FAILED: &str = "No se pudo subir el archivo";
