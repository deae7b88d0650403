//! Web login gateway backend.
//!
//! This module contains the complete implementation of the gateway: the
//! Discord OAuth2 login flow, session-backed identity resolution, the landing
//! page, and the optional gateway bot. The backend uses Axum as the web
//! framework, tower-sessions for session management, the oauth2 crate for the
//! authorization-code exchange, and Serenity for the bot connection.
//!
//! # Architecture
//!
//! The server follows a layered architecture with clear separation of concerns:
//!
//! - **Controller Layer** (`controller/`) - HTTP request handlers
//! - **Service Layer** (`service/`) - OAuth exchange logic between controllers and Discord
//! - **Model Layer** (`model/`) - The identity record and provider profile shape
//! - **Error Layer** (`error/`) - Application error types and HTTP response mapping
//! - **Middleware** (`middleware/`) - Type-safe session access
//! - **View** (`view`) - Landing page HTML rendering
//!
//! # Infrastructure
//!
//! - **Configuration** (`config`) - Environment-based application configuration
//! - **State** (`state`) - Shared application state (HTTP and OAuth clients)
//! - **Startup** (`startup`) - Construction of clients, session store, and session layer
//! - **Router** (`router`) - Axum route configuration and static file fallback
//! - **Bot** (`bot/`) - Optional Discord gateway bot
//!
//! # Request Flow
//!
//! 1. **Router** receives the HTTP request and routes to a controller
//! 2. The session layer resolves the signed cookie to a session record
//! 3. **Controller** reads or mutates the session through the middleware
//!    wrappers and, for auth routes, drives the **Service** layer's OAuth
//!    exchange
//! 4. The response is a redirect (auth routes) or the rendered page (`/`)

pub mod bot;
pub mod config;
pub mod controller;
pub mod error;
pub mod middleware;
pub mod model;
pub mod router;
pub mod service;
pub mod startup;
pub mod state;
pub mod view;
