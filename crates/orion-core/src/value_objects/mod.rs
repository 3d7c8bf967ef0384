//! Value objects - immutable types that represent domain concepts

mod auditoria;
mod estatus;
mod id_codec;
mod listado;
mod nivel;
mod periodo;
mod permission_map;
mod tabla;

pub use auditoria::Auditoria;
pub use estatus::Estatus;
pub use id_codec::{IdCodec, DEFAULT_MIN_LENGTH};
pub use listado::{Listado, Pagina, DEFAULT_LIMIT, MAX_LIMIT};
pub use nivel::Nivel;
pub use periodo::{validar_anos, Periodo};
pub use permission_map::{menu_principal, Concesion, MenuItem, PermissionMap};
pub use tabla::{CampoUnico, Tabla};
