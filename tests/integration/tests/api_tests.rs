//! REST API integration tests
//!
//! These tests need a live PostgreSQL (DATABASE_URL) and Redis (REDIS_URL);
//! they are skipped when either is missing.

use base64::{engine::general_purpose::STANDARD, Engine};
use integration_tests::*;
use reqwest::StatusCode;
use serde_json::{json, Value};

// ============================================================================
// Health
// ============================================================================

#[tokio::test]
async fn test_health_check() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");

    let response = server.get("/health").await.unwrap();
    let body: Value = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(body["status"], "healthy");

    let response = server.get("/health/ready").await.unwrap();
    assert_status(response, StatusCode::OK).await.unwrap();
}

// ============================================================================
// Authentication
// ============================================================================

#[tokio::test]
async fn test_login() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let usuario = server.seed_user().await.unwrap();

    let auth = server.login(&usuario).await.unwrap();

    assert_eq!(auth.usuario.id, usuario.id);
    assert_eq!(auth.usuario.email, usuario.email);
    assert_eq!(auth.token_type, "Bearer");
    assert!(!auth.access_token.is_empty());
    assert!(auth.expires_in > 0);
}

#[tokio::test]
async fn test_login_invalid_credentials() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let usuario = server.seed_user().await.unwrap();

    let login_req = LoginRequest {
        email: usuario.email.clone(),
        password: "wrongpass".to_string(),
    };
    let response = server.post("/api/v1/auth/login", &login_req).await.unwrap();
    assert_status(response, StatusCode::UNAUTHORIZED).await.unwrap();

    let login_req = LoginRequest {
        email: "nadie@orion.test".to_string(),
        password: "wrongpass".to_string(),
    };
    let response = server.post("/api/v1/auth/login", &login_req).await.unwrap();
    assert_status(response, StatusCode::UNAUTHORIZED).await.unwrap();
}

#[tokio::test]
async fn test_login_inactive_user_rejected() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let usuario = server.seed_user().await.unwrap();
    sqlx::query("UPDATE usuarios SET estatus = 'B' WHERE id = $1")
        .bind(usuario.id)
        .execute(&server.pool)
        .await
        .unwrap();

    let response = server
        .post("/api/v1/auth/login", &usuario.login_request())
        .await
        .unwrap();
    assert_status(response, StatusCode::UNAUTHORIZED).await.unwrap();
}

#[tokio::test]
async fn test_missing_auth_is_unauthorized() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");

    let response = server.get("/api/v1/auth/me").await.unwrap();
    let body: ErrorBody = assert_json(response, StatusCode::UNAUTHORIZED).await.unwrap();
    assert_eq!(body.error.code, "MISSING_AUTHORIZATION");

    let response = server.get_auth("/api/v1/auth/me", "not-a-jwt").await.unwrap();
    assert_status(response, StatusCode::UNAUTHORIZED).await.unwrap();
}

#[tokio::test]
async fn test_me_lists_permissions_and_menu() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let admin = server.seed_admin().await.unwrap();
    let auth = server.login(&admin).await.unwrap();

    let response = server
        .get_auth("/api/v1/auth/me", &auth.access_token)
        .await
        .unwrap();
    let me: MeResponse = assert_json(response, StatusCode::OK).await.unwrap();

    assert_eq!(me.usuario.id, admin.id);
    assert_eq!(me.permisos["BANCOS"], 4);
    assert!(!me.menu.is_empty());

    let response = server.get_auth("/api/v1/menu", &auth.access_token).await.unwrap();
    let menu: Vec<Value> = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(menu.len(), me.menu.len());
}

#[tokio::test]
async fn test_me_without_roles_has_no_permissions() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let usuario = server.seed_user().await.unwrap();
    let auth = server.login(&usuario).await.unwrap();

    let response = server
        .get_auth("/api/v1/auth/me", &auth.access_token)
        .await
        .unwrap();
    let me: MeResponse = assert_json(response, StatusCode::OK).await.unwrap();

    assert!(me.permisos.is_empty());
    assert!(me.menu.is_empty());
}

#[tokio::test]
async fn test_refresh_token_rotates() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let usuario = server.seed_user().await.unwrap();
    let auth = server.login(&usuario).await.unwrap();

    let refresh_req = RefreshTokenRequest {
        refresh_token: auth.refresh_token.clone(),
    };
    let response = server.post("/api/v1/auth/refresh", &refresh_req).await.unwrap();
    let tokens: AuthResponse = assert_json(response, StatusCode::OK).await.unwrap();
    assert!(!tokens.access_token.is_empty());
    assert_ne!(tokens.refresh_token, auth.refresh_token);

    // The old refresh token is spent
    let response = server.post("/api/v1/auth/refresh", &refresh_req).await.unwrap();
    assert_status(response, StatusCode::UNAUTHORIZED).await.unwrap();
}

#[tokio::test]
async fn test_logout_revokes_refresh_token() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let usuario = server.seed_user().await.unwrap();
    let auth = server.login(&usuario).await.unwrap();

    let refresh_req = RefreshTokenRequest {
        refresh_token: auth.refresh_token.clone(),
    };
    let response = server
        .post_auth("/api/v1/auth/logout", &auth.access_token, &refresh_req)
        .await
        .unwrap();
    assert_status(response, StatusCode::NO_CONTENT).await.unwrap();

    let response = server.post("/api/v1/auth/refresh", &refresh_req).await.unwrap();
    assert_status(response, StatusCode::UNAUTHORIZED).await.unwrap();
}

#[tokio::test]
async fn test_login_and_logout_are_recorded() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let admin = server.seed_admin().await.unwrap();
    let auth = server.login(&admin).await.unwrap();

    let response = server
        .post_empty_auth("/api/v1/auth/logout", &auth.access_token)
        .await
        .unwrap();
    assert_status(response, StatusCode::NO_CONTENT).await.unwrap();

    let path = format!("/api/v1/entradas_salidas?usuario_id={}", admin.id);
    let response = server.get_auth(&path, &auth.access_token).await.unwrap();
    let pagina: PaginaResponse<Value> = assert_json(response, StatusCode::OK).await.unwrap();

    assert_eq!(pagina.pagination.total, 2);
    let tipos: Vec<&str> = pagina
        .data
        .iter()
        .filter_map(|e| e["tipo"].as_str())
        .collect();
    assert!(tipos.contains(&"INGRESO"));
    assert!(tipos.contains(&"SALIO"));
}

#[tokio::test]
async fn test_set_password() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let mut usuario = server.seed_user().await.unwrap();
    let token = server.admin_token().await.unwrap();

    let body = PasswordRequest {
        password: "Nueva.Contrasena.99".to_string(),
    };
    let path = format!("/api/v1/usuarios/{}/password", usuario.id);
    let response = server.put_auth(&path, &token, &body).await.unwrap();
    assert_status(response, StatusCode::NO_CONTENT).await.unwrap();

    usuario.password = body.password.clone();
    server.login(&usuario).await.unwrap();
}

// ============================================================================
// API keys
// ============================================================================

#[tokio::test]
async fn test_api_key_authenticates_until_cleared() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let usuario = server.seed_user().await.unwrap();
    let token = server.admin_token().await.unwrap();

    let path = format!("/api/v1/usuarios/{}/api_key", usuario.id);
    let response = server.post_empty_auth(&path, &token).await.unwrap();
    let key: ApiKeyResponse = assert_json(response, StatusCode::CREATED).await.unwrap();
    assert!(!key.api_key.is_empty());

    let response = server.get_api_key("/api/v1/auth/me", &key.api_key).await.unwrap();
    let me: MeResponse = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(me.usuario.id, usuario.id);

    let response = server.delete_auth(&path, &token).await.unwrap();
    assert_status(response, StatusCode::NO_CONTENT).await.unwrap();

    let response = server.get_api_key("/api/v1/auth/me", &key.api_key).await.unwrap();
    assert_status(response, StatusCode::UNAUTHORIZED).await.unwrap();
}

#[tokio::test]
async fn test_credentials_need_administrar_even_for_own_account() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let ana = server.seed_user().await.unwrap();
    let beto = server.seed_user().await.unwrap();
    let auth = server.login(&ana).await.unwrap();

    for usuario_id in [ana.id, beto.id] {
        let path = format!("/api/v1/usuarios/{}/api_key", usuario_id);
        let response = server.post_empty_auth(&path, &auth.access_token).await.unwrap();
        assert_status(response, StatusCode::FORBIDDEN).await.unwrap();
    }

    let path = format!("/api/v1/usuarios/{}/password", ana.id);
    let body = PasswordRequest {
        password: "Nueva.Contrasena.99".to_string(),
    };
    let response = server.put_auth(&path, &auth.access_token, &body).await.unwrap();
    assert_status(response, StatusCode::FORBIDDEN).await.unwrap();
}

// ============================================================================
// Catalogs
// ============================================================================

#[tokio::test]
async fn test_banco_lifecycle() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let token = server.admin_token().await.unwrap();

    // Create
    let request = NombreRequest::unique("banco");
    let response = server
        .post_auth("/api/v1/bancos", &token, &request)
        .await
        .unwrap();
    let banco: Banco = assert_json(response, StatusCode::CREATED).await.unwrap();
    assert_eq!(banco.nombre, request.nombre.to_uppercase());
    assert_eq!(banco.estatus, "A");

    // Duplicate name
    let response = server
        .post_auth("/api/v1/bancos", &token, &request)
        .await
        .unwrap();
    let body: ErrorBody = assert_json(response, StatusCode::BAD_REQUEST).await.unwrap();
    assert_eq!(body.error.code, "VALIDATION_ERROR");

    // Update
    let renombrado = NombreRequest::unique("banco renombrado");
    let path = format!("/api/v1/bancos/{}", banco.id);
    let response = server.patch_auth(&path, &token, &renombrado).await.unwrap();
    let actualizado: Banco = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(actualizado.nombre, renombrado.nombre.to_uppercase());

    // Delete
    let response = server.delete_auth(&path, &token).await.unwrap();
    let borrado: Banco = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(borrado.estatus, "B");

    // Deleting twice changes nothing
    let response = server.delete_auth(&path, &token).await.unwrap();
    let otra_vez: Banco = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(otra_vez.estatus, "B");

    // Recover
    let response = server
        .post_empty_auth(&format!("{path}/recover"), &token)
        .await
        .unwrap();
    let recuperado: Banco = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(recuperado.estatus, "A");
    assert_eq!(recuperado.id, banco.id);
}

#[tokio::test]
async fn test_list_pagination() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let token = server.admin_token().await.unwrap();

    for _ in 0..3 {
        let response = server
            .post_auth("/api/v1/turnos", &token, &NombreRequest::unique("turno"))
            .await
            .unwrap();
        assert_status(response, StatusCode::CREATED).await.unwrap();
    }

    let response = server
        .get_auth("/api/v1/turnos?start=0&length=2", &token)
        .await
        .unwrap();
    let pagina: PaginaResponse<Value> = assert_json(response, StatusCode::OK).await.unwrap();

    assert_eq!(pagina.data.len(), 2);
    assert_eq!(pagina.pagination.start, 0);
    assert_eq!(pagina.pagination.length, 2);
    assert!(pagina.pagination.total >= 3);
    assert!(pagina.pagination.has_more);

    let response = server
        .get_auth("/api/v1/turnos?estatus=X", &token)
        .await
        .unwrap();
    assert_status(response, StatusCode::BAD_REQUEST).await.unwrap();
}

#[tokio::test]
async fn test_invalid_path_id() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let token = server.admin_token().await.unwrap();

    let response = server.get_auth("/api/v1/bancos/abc", &token).await.unwrap();
    let body: ErrorBody = assert_json(response, StatusCode::BAD_REQUEST).await.unwrap();
    assert_eq!(body.error.code, "INVALID_PATH_PARAMETER");

    let response = server.get_auth("/api/v1/bancos/0", &token).await.unwrap();
    assert_status(response, StatusCode::BAD_REQUEST).await.unwrap();

    let response = server
        .get_auth("/api/v1/bancos/2147483000", &token)
        .await
        .unwrap();
    assert_status(response, StatusCode::NOT_FOUND).await.unwrap();
}

#[tokio::test]
async fn test_user_without_permission_is_forbidden() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let usuario = server.seed_user().await.unwrap();
    let auth = server.login(&usuario).await.unwrap();

    let response = server
        .get_auth("/api/v1/bancos", &auth.access_token)
        .await
        .unwrap();
    assert_status(response, StatusCode::FORBIDDEN).await.unwrap();

    let response = server
        .post_auth("/api/v1/bancos", &auth.access_token, &NombreRequest::unique("banco"))
        .await
        .unwrap();
    assert_status(response, StatusCode::FORBIDDEN).await.unwrap();
}

#[tokio::test]
async fn test_unknown_parent_is_rejected() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let token = server.admin_token().await.unwrap();

    let body = json!({
        "persona_id": 2147483000,
        "descripcion": "sin persona",
    });
    let response = server
        .post_auth("/api/v1/personas_adjuntos", &token, &body)
        .await
        .unwrap();
    assert_status(response, StatusCode::BAD_REQUEST).await.unwrap();
}

// ============================================================================
// Audit log
// ============================================================================

#[tokio::test]
async fn test_mutations_are_audited() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let admin = server.seed_admin().await.unwrap();
    let token = server.login(&admin).await.unwrap().access_token;

    let response = server
        .post_auth("/api/v1/bancos", &token, &NombreRequest::unique("banco"))
        .await
        .unwrap();
    let banco: Banco = assert_json(response, StatusCode::CREATED).await.unwrap();

    let path = format!("/api/v1/bitacoras?modulo=BANCOS&usuario_id={}", admin.id);
    let response = server.get_auth(&path, &token).await.unwrap();
    let pagina: PaginaResponse<Bitacora> = assert_json(response, StatusCode::OK).await.unwrap();

    assert_eq!(pagina.pagination.total, 1);
    let bitacora = &pagina.data[0];
    assert_eq!(bitacora.usuario_id, admin.id);
    assert!(bitacora.descripcion.contains(&banco.nombre));

    let response = server
        .get_auth(&format!("/api/v1/bitacoras/{}", bitacora.id), &token)
        .await
        .unwrap();
    let detalle: Bitacora = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(detalle.id, bitacora.id);
    assert_eq!(detalle.modulo_id, bitacora.modulo_id);
}

// ============================================================================
// Personas
// ============================================================================

#[tokio::test]
async fn test_persona_create_and_search() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let token = server.admin_token().await.unwrap();

    let response = server
        .post_auth("/api/v1/personas", &token, &persona_request("María José"))
        .await
        .unwrap();
    let persona: Persona = assert_json(response, StatusCode::CREATED).await.unwrap();
    assert_eq!(persona.nombres, "MARIA JOSE");

    let path = format!("/api/v1/personas/search?curp={}", &persona.curp[..10]);
    let response = server.get_auth(&path, &token).await.unwrap();
    let pagina: PaginaResponse<Persona> = assert_json(response, StatusCode::OK).await.unwrap();
    assert!(pagina.data.iter().any(|p| p.id == persona.id));

    // The CURP is unique
    let mut duplicada = persona_request("Otra Persona");
    duplicada["curp"] = json!(persona.curp);
    let response = server
        .post_auth("/api/v1/personas", &token, &duplicada)
        .await
        .unwrap();
    assert_status(response, StatusCode::BAD_REQUEST).await.unwrap();
}

#[tokio::test]
async fn test_persona_invalid_curp() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let token = server.admin_token().await.unwrap();

    let mut body = persona_request("Sin Curp");
    body["curp"] = json!("NO-ES-CURP");
    let response = server
        .post_auth("/api/v1/personas", &token, &body)
        .await
        .unwrap();
    let error: ErrorBody = assert_json(response, StatusCode::BAD_REQUEST).await.unwrap();
    assert_eq!(error.error.message, "CURP inválida");
}

#[tokio::test]
async fn test_adjunto_upload() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let token = server.admin_token().await.unwrap();

    let response = server
        .post_auth("/api/v1/personas", &token, &persona_request("Con Adjunto"))
        .await
        .unwrap();
    let persona: Persona = assert_json(response, StatusCode::CREATED).await.unwrap();

    let body = json!({ "persona_id": persona.id, "descripcion": "acta de nacimiento" });
    let response = server
        .post_auth("/api/v1/personas_adjuntos", &token, &body)
        .await
        .unwrap();
    let adjunto: PersonaAdjunto = assert_json(response, StatusCode::CREATED).await.unwrap();
    assert_eq!(adjunto.persona_id, persona.id);
    assert!(adjunto.archivo.is_none());

    let path = format!("/api/v1/personas_adjuntos/{}/file", adjunto.id);

    // Disallowed extension
    let file = FileRequest {
        nombre_archivo: "virus.exe".to_string(),
        contenido_base64: STANDARD.encode(b"MZ"),
    };
    let response = server.post_auth(&path, &token, &file).await.unwrap();
    assert_status(response, StatusCode::BAD_REQUEST).await.unwrap();

    // Not base64
    let file = FileRequest {
        nombre_archivo: "acta.pdf".to_string(),
        contenido_base64: "%%%".to_string(),
    };
    let response = server.post_auth(&path, &token, &file).await.unwrap();
    assert_status(response, StatusCode::BAD_REQUEST).await.unwrap();

    let file = FileRequest {
        nombre_archivo: "acta.pdf".to_string(),
        contenido_base64: STANDARD.encode(b"%PDF-1.4\n%%EOF\n"),
    };
    let response = server.post_auth(&path, &token, &file).await.unwrap();
    let subido: PersonaAdjunto = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(subido.id, adjunto.id);
    assert!(subido.archivo.as_deref().is_some_and(|a| a.ends_with(".pdf")));
    assert!(subido.url.is_some());

    // Without permission the payload is never looked at
    let intruso = server.seed_user().await.unwrap();
    let intruso_token = server.login(&intruso).await.unwrap().access_token;
    let file = FileRequest {
        nombre_archivo: "acta.pdf".to_string(),
        contenido_base64: "%%%".to_string(),
    };
    let response = server.post_auth(&path, &intruso_token, &file).await.unwrap();
    assert_status(response, StatusCode::FORBIDDEN).await.unwrap();
}

// ============================================================================
// Tareas
// ============================================================================

#[tokio::test]
async fn test_tarea_launch_and_progress() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let admin = server.seed_admin().await.unwrap();
    let token = server.login(&admin).await.unwrap().access_token;

    let request = TaskRequest {
        comando: "personas.exportar".to_string(),
        mensaje: "Exportando personas".to_string(),
        args: json!({ "estatus": "A" }),
    };
    let response = server.post_auth("/api/v1/tareas", &token, &request).await.unwrap();
    let tarea: Tarea = assert_json(response, StatusCode::CREATED).await.unwrap();
    assert_eq!(tarea.usuario_id, admin.id);
    assert_eq!(tarea.comando, request.comando);
    assert!(!tarea.ha_terminado);

    let response = server
        .get_auth(&format!("/api/v1/tareas/{}/progress", tarea.id), &token)
        .await
        .unwrap();
    let progreso: ProgressResponse = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(progreso.id, tarea.id);
    assert!((0..=100).contains(&progreso.progreso));

    let response = server.get_auth("/api/v1/tareas/in_progress", &token).await.unwrap();
    let pendientes: Vec<Tarea> = assert_json(response, StatusCode::OK).await.unwrap();
    assert!(pendientes.iter().any(|t| t.id == tarea.id));
}

#[tokio::test]
async fn test_worker_reports_progress_and_error() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let token = server.admin_token().await.unwrap();

    let request = TaskRequest {
        comando: "personas.exportar".to_string(),
        mensaje: "Exportando personas".to_string(),
        args: json!({}),
    };
    let response = server.post_auth("/api/v1/tareas", &token, &request).await.unwrap();
    let tarea: Tarea = assert_json(response, StatusCode::CREATED).await.unwrap();
    let path = format!("/api/v1/tareas/{}/progress", tarea.id);

    let response = server
        .put_auth(&path, &token, &json!({ "progreso": 40, "mensaje": "Avanzando" }))
        .await
        .unwrap();
    assert_status(response, StatusCode::NO_CONTENT).await.unwrap();
    let response = server.get_auth(&path, &token).await.unwrap();
    let progreso: ProgressResponse = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(progreso.progreso, 40);
    assert!(!progreso.ha_terminado);

    let response = server
        .put_auth(
            &format!("/api/v1/tareas/{}/error", tarea.id),
            &token,
            &json!({ "mensaje": "Sin conexión" }),
        )
        .await
        .unwrap();
    assert_status(response, StatusCode::NO_CONTENT).await.unwrap();
    let response = server.get_auth(&path, &token).await.unwrap();
    let progreso: ProgressResponse = assert_json(response, StatusCode::OK).await.unwrap();
    assert!(progreso.ha_terminado);

    let response = server.get_auth("/api/v1/tareas/in_progress", &token).await.unwrap();
    let pendientes: Vec<Tarea> = assert_json(response, StatusCode::OK).await.unwrap();
    assert!(pendientes.iter().all(|t| t.id != tarea.id));
}

#[tokio::test]
async fn test_tarea_progress_rejects_bad_id() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let token = server.admin_token().await.unwrap();

    let response = server
        .get_auth("/api/v1/tareas/not-a-uuid/progress", &token)
        .await
        .unwrap();
    assert_status(response, StatusCode::BAD_REQUEST).await.unwrap();
}
