// src/routes.rs

use axum::{
    Router,
    http::{HeaderValue, Method, header},
    middleware,
    routing::{delete, get, post, put},
};
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::{
    handlers::{admin, assessment, assignment, auth, catalog, user},
    state::AppState,
    utils::jwt::{auth_middleware, staff_middleware},
};

/// Assembles the main application router.
///
/// * Merges all sub-routers (auth, catalog, assessments, assignments, admin, users).
/// * Applies global middleware (Trace, CORS).
/// * Injects global state (Database Pool + Config).
pub fn create_router(state: AppState) -> Router {
    let origins = [
        HeaderValue::from_static("http://localhost:3000"),
        HeaderValue::from_static("http://127.0.0.1:3000"),
    ];

    let cors = CorsLayer::new()
        .allow_origin(origins)
        .allow_methods([Method::GET, Method::POST, Method::PUT, Method::DELETE])
        .allow_headers([header::AUTHORIZATION, header::CONTENT_TYPE]);

    let auth_routes = Router::new()
        .route("/register", post(auth::register))
        .route("/login", post(auth::login));

    let catalog_routes = Router::new()
        .route("/api/courses", get(catalog::list_courses))
        .route("/api/courses/{id}/topics", get(catalog::list_course_topics))
        .route(
            "/api/courses/{id}/questions",
            get(catalog::list_course_questions),
        )
        .route("/api/topics/{id}", get(catalog::get_topic))
        .route(
            "/api/topics/{id}/questions",
            get(catalog::list_topic_questions),
        )
        .route(
            "/api/topics/{id}/recommendations",
            get(catalog::list_topic_recommendations),
        );

    let assessment_routes = Router::new()
        .route("/submit", post(assessment::submit_assessment))
        .route("/gaps/{student_id}", get(assessment::list_student_gaps))
        .route(
            "/history/{student_id}",
            get(assessment::list_student_assessments),
        )
        .layer(middleware::from_fn_with_state(state.clone(), auth_middleware));

    let assignment_routes = Router::new()
        .route("/mine", get(assignment::list_my_assignments))
        .route("/complete", put(assignment::complete_topic_assignments))
        .route("/{id}/complete", put(assignment::complete_assignment))
        .layer(middleware::from_fn_with_state(state.clone(), auth_middleware));

    let admin_routes = Router::new()
        .route("/courses", post(admin::create_course))
        .route("/topics", post(admin::create_topic))
        .route("/questions", post(admin::create_question))
        .route("/questions/{id}", delete(admin::delete_question))
        .route("/recommendations", post(admin::create_recommendation))
        .route("/assignments", post(admin::assign_topic))
        // Double middleware protection: Auth first, then Staff check
        .layer(middleware::from_fn(staff_middleware))
        .layer(middleware::from_fn_with_state(state.clone(), auth_middleware));

    let user_routes = Router::new()
        .route("/", get(user::list_users))
        .route("/students", get(user::list_students))
        .route("/faculty", get(user::list_faculty))
        .route("/{id}", get(user::get_user))
        .layer(middleware::from_fn(staff_middleware))
        .layer(middleware::from_fn_with_state(state.clone(), auth_middleware));

    Router::new()
        .nest("/api/auth", auth_routes)
        .merge(catalog_routes)
        .nest("/api/assessments", assessment_routes)
        .nest("/api/assignments", assignment_routes)
        .nest("/api/admin", admin_routes)
        .nest("/api/users", user_routes)
        // Global Middleware (applied from outside in)
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}
