use inquiry_core_contact_impl::ContactFeatureServiceImpl;
use inquiry_core_health_impl::HealthFeatureServiceImpl;
use inquiry_email_impl::{template::TemplateEmailServiceImpl, EmailServiceImpl};
use inquiry_persistence_postgres::{contact::PostgresContactRepository, PostgresDatabase};
use inquiry_shared_impl::{id::IdServiceImpl, time::TimeServiceImpl};
use inquiry_templates_impl::TemplateServiceImpl;

// API
pub type RestServer = inquiry_api_rest::RestServer<HealthFeature, ContactFeature>;

// Persistence
pub type Database = PostgresDatabase;

// Email
pub type Email = EmailServiceImpl;
pub type TemplateEmail = TemplateEmailServiceImpl<Email, Template>;

// Template
pub type Template = TemplateServiceImpl;

// Shared
pub type Id = IdServiceImpl;
pub type Time = TimeServiceImpl;

// Repositories
pub type ContactRepo = PostgresContactRepository;

// Core
pub type HealthFeature = HealthFeatureServiceImpl<Time, Database, Email>;
pub type ContactFeature =
    ContactFeatureServiceImpl<Database, Id, Time, ContactRepo, TemplateEmail>;
