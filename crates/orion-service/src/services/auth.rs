//! Authentication service
//!
//! Handles login, token refresh and logout, resolves the user behind a
//! bearer token or an API key, and manages API keys and passwords.

use chrono::{DateTime, Duration, TimeZone, Utc};
use orion_cache::RefreshTokenData;
use orion_common::auth::{
    generate_api_key, hash_password, validate_password_strength, verify_password, TokenPair,
};
use orion_common::text::safe_email;
use orion_common::AppError;
use orion_core::entities::{EntradaSalida, TipoEntradaSalida, Usuario};
use orion_core::{Entity, Nivel, Tabla};
use tracing::{info, instrument, warn};
use uuid::Uuid;
use validator::Validate;

use crate::dto::{
    permisos_por_modulo, ApiKeyResponse, AuthResponse, CurrentUserResponse, LoginRequest,
    MeResponse, PasswordRequest, RefreshTokenRequest,
};

use super::auditoria::AuditoriaBuilder;
use super::context::ServiceContext;
use super::current_user::CurrentUser;
use super::error::{ServiceError, ServiceResult};
use super::permission::PermissionService;

/// Expiration written when an API key is cleared
fn expiracion_limpia() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2000, 1, 1, 0, 0, 0)
        .single()
        .unwrap_or_default()
}

/// Authentication service
pub struct AuthService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> AuthService<'a> {
    /// Create a new AuthService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Login with email and password
    ///
    /// Unknown e-mail, inactive user and wrong password are indistinguishable
    /// to the caller.
    #[instrument(skip(self, request), fields(email = %request.email))]
    pub async fn login(&self, request: LoginRequest, ip: &str) -> ServiceResult<AuthResponse> {
        request.validate()?;
        let email = safe_email(&request.email, false)?;

        let usuario = self
            .ctx
            .usuario_repo()
            .find_by_email(&email)
            .await?
            .ok_or_else(|| {
                warn!("Login failed: user not found");
                ServiceError::App(AppError::InvalidCredentials)
            })?;

        if !usuario.is_active() {
            warn!(usuario_id = usuario.id, "Login failed: user is inactive");
            return Err(ServiceError::App(AppError::InvalidCredentials));
        }

        let password_hash = self
            .ctx
            .usuario_repo()
            .password_hash(usuario.id)
            .await?
            .ok_or_else(|| {
                warn!(usuario_id = usuario.id, "Login failed: no password hash");
                ServiceError::App(AppError::InvalidCredentials)
            })?;

        if !verify_password(&request.password, &password_hash)? {
            warn!(usuario_id = usuario.id, "Login failed: invalid password");
            return Err(ServiceError::App(AppError::InvalidCredentials));
        }

        self.ctx
            .entrada_salida_repo()
            .record(&EntradaSalida::new(usuario.id, TipoEntradaSalida::Ingreso, ip))
            .await?;

        let response = self.issue_tokens(&usuario, Some(ip)).await?;
        info!(usuario_id = usuario.id, "User logged in successfully");
        Ok(response)
    }

    /// Refresh access token using refresh token
    #[instrument(skip(self, request))]
    pub async fn refresh(&self, request: RefreshTokenRequest) -> ServiceResult<AuthResponse> {
        self.ctx
            .jwt_service()
            .validate_refresh_token(&request.refresh_token)?;

        let refresh_data = self
            .ctx
            .refresh_token_store()
            .get(&request.refresh_token)
            .await
            .map_err(|e| ServiceError::internal(e.to_string()))?
            .ok_or(ServiceError::App(AppError::InvalidToken))?;

        let usuario = self.active_usuario(refresh_data.usuario_id, AppError::InvalidToken).await?;

        self.ctx
            .refresh_token_store()
            .revoke(&request.refresh_token)
            .await
            .map_err(|e| ServiceError::internal(e.to_string()))?;

        let response = self
            .issue_tokens(&usuario, refresh_data.ip_address.as_deref())
            .await?;
        info!(usuario_id = usuario.id, "Tokens refreshed successfully");
        Ok(response)
    }

    /// Logout by revoking one refresh token, or every one of the user
    #[instrument(skip(self, user, refresh_token), fields(usuario_id = user.id()))]
    pub async fn logout(
        &self,
        user: &CurrentUser,
        refresh_token: Option<String>,
        ip: &str,
    ) -> ServiceResult<()> {
        if let Some(token) = refresh_token {
            self.ctx
                .refresh_token_store()
                .revoke(&token)
                .await
                .map_err(|e| ServiceError::internal(e.to_string()))?;
        } else {
            self.ctx
                .refresh_token_store()
                .revoke_all_for_user(user.id())
                .await
                .map_err(|e| ServiceError::internal(e.to_string()))?;
        }

        self.ctx
            .entrada_salida_repo()
            .record(&EntradaSalida::new(user.id(), TipoEntradaSalida::Salio, ip))
            .await?;

        info!("User logged out successfully");
        Ok(())
    }

    /// Resolve the user behind an access token
    #[instrument(skip(self, token))]
    pub async fn authenticate_token(&self, token: &str) -> ServiceResult<CurrentUser> {
        let claims = self.ctx.jwt_service().validate_access_token(token)?;
        let usuario_id = claims.user_id()?;

        let usuario = self.active_usuario(usuario_id, AppError::InvalidToken).await?;
        Ok(CurrentUser::new(usuario))
    }

    /// Resolve the user behind an API key; only unexpired keys of active
    /// users are accepted
    #[instrument(skip(self, api_key))]
    pub async fn authenticate_api_key(&self, api_key: &str) -> ServiceResult<CurrentUser> {
        if api_key.trim().is_empty() {
            return Err(ServiceError::App(AppError::InvalidApiKey));
        }

        let usuario = self
            .ctx
            .usuario_repo()
            .find_by_api_key(api_key)
            .await?
            .filter(|usuario| usuario.is_active() && usuario.api_key_vigente(Utc::now()))
            .ok_or_else(|| {
                warn!("API key rejected");
                ServiceError::App(AppError::InvalidApiKey)
            })?;

        Ok(CurrentUser::new(usuario))
    }

    /// The user with their levels per module and their menu
    pub async fn me(&self, user: &CurrentUser) -> ServiceResult<MeResponse> {
        let permisos = permisos_por_modulo(user.permisos(self.ctx).await?);
        let menu = user.menu(self.ctx).await?;
        Ok(MeResponse {
            usuario: CurrentUserResponse::from(user.usuario()),
            permisos,
            menu,
        })
    }

    /// Generate a new API key for a user, replacing the previous one
    #[instrument(skip(self, user), fields(usuario_id = user.id()))]
    pub async fn api_key(&self, user: &CurrentUser, usuario_id: i32) -> ServiceResult<ApiKeyResponse> {
        self.require_administrar(user).await?;
        let usuario = self.find_usuario(usuario_id).await?;

        let api_key = generate_api_key(self.ctx.salt(), usuario.id, &usuario.email);
        let api_key_expiracion = Utc::now() + Duration::days(self.ctx.api_key_days());

        let auditoria = AuditoriaBuilder::new(Tabla::Usuarios, user)
            .descripcion(format!("Nueva API key de {}", usuario.email))
            .build();
        self.ctx
            .usuario_repo()
            .set_api_key(usuario.id, &api_key, api_key_expiracion, &auditoria)
            .await?;

        info!(target_id = usuario.id, %api_key_expiracion, "API key generated");
        Ok(ApiKeyResponse {
            api_key,
            api_key_expiracion,
        })
    }

    /// Revoke the API key of a user
    #[instrument(skip(self, user), fields(usuario_id = user.id()))]
    pub async fn clear_api_key(&self, user: &CurrentUser, usuario_id: i32) -> ServiceResult<()> {
        self.require_administrar(user).await?;
        let usuario = self.find_usuario(usuario_id).await?;

        let auditoria = AuditoriaBuilder::new(Tabla::Usuarios, user)
            .descripcion(format!("Eliminada API key de {}", usuario.email))
            .build();
        self.ctx
            .usuario_repo()
            .set_api_key(usuario.id, "", expiracion_limpia(), &auditoria)
            .await?;

        info!(target_id = usuario.id, "API key cleared");
        Ok(())
    }

    /// Replace the password of a user
    #[instrument(skip(self, user, request), fields(usuario_id = user.id()))]
    pub async fn set_password(
        &self,
        user: &CurrentUser,
        usuario_id: i32,
        request: PasswordRequest,
    ) -> ServiceResult<()> {
        self.require_administrar(user).await?;
        request.validate()?;
        validate_password_strength(&request.password)?;
        let usuario = self.find_usuario(usuario_id).await?;

        let password_hash = hash_password(&request.password)?;
        let auditoria = AuditoriaBuilder::new(Tabla::Usuarios, user)
            .descripcion(format!("Cambiada la contraseña de {}", usuario.email))
            .build();
        self.ctx
            .usuario_repo()
            .set_password(usuario.id, &password_hash, &auditoria)
            .await?;

        info!(target_id = usuario.id, "Password changed");
        Ok(())
    }

    // === Helpers ===

    /// API keys and passwords are managed by administrators of USUARIOS only
    async fn require_administrar(&self, user: &CurrentUser) -> ServiceResult<()> {
        PermissionService::new(self.ctx)
            .require(user, Tabla::Usuarios.modulo(), Nivel::Administrar)
            .await
    }

    async fn find_usuario(&self, usuario_id: i32) -> ServiceResult<Usuario> {
        self.ctx
            .usuario_repo()
            .find_by_id(usuario_id)
            .await?
            .ok_or_else(|| ServiceError::not_found(Tabla::Usuarios.entidad(), usuario_id))
    }

    /// Load a user that may still sign in; anything else is `rechazo`
    async fn active_usuario(&self, usuario_id: i32, rechazo: AppError) -> ServiceResult<Usuario> {
        match self.ctx.usuario_repo().find_by_id(usuario_id).await? {
            Some(usuario) if usuario.is_active() => Ok(usuario),
            _ => {
                warn!(usuario_id, "Authentication rejected: user missing or inactive");
                Err(ServiceError::App(rechazo))
            }
        }
    }

    /// Generate a token pair and keep its refresh token in Redis
    async fn issue_tokens(&self, usuario: &Usuario, ip: Option<&str>) -> ServiceResult<AuthResponse> {
        let session_id = Uuid::new_v4().to_string();
        let TokenPair {
            access_token,
            refresh_token,
            expires_in,
            ..
        } = self
            .ctx
            .jwt_service()
            .generate_token_pair_with_session(usuario.id, Some(session_id.clone()))?;

        let mut refresh_data = RefreshTokenData::new(usuario.id, session_id);
        if let Some(ip) = ip {
            refresh_data = refresh_data.with_ip_address(ip);
        }
        self.ctx
            .refresh_token_store()
            .store(&refresh_token, &refresh_data)
            .await
            .map_err(|e| ServiceError::internal(e.to_string()))?;

        Ok(AuthResponse::new(
            access_token,
            refresh_token,
            expires_in,
            CurrentUserResponse::from(usuario),
        ))
    }
}
