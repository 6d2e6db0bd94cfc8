// tellerform - validated request forms for a banking web application
// Declarative field rules (garde) plus user-record lookups behind UserStore

pub mod config;
pub mod database;
pub mod form_context;
pub mod form_data;
pub mod forms;
pub mod pipeline;
pub mod store;
pub mod types;
pub mod validation;

pub use config::Config;
pub use database::{Database, DatabaseType, NewUser, User};
pub use form_context::FormContext;
pub use form_data::FormData;
pub use forms::{
    validate_form, AccountSummary, BankForm, ConfirmTransferForm, DepositForm, DepositRequest,
    LoginAttempt, LoginForm, NewAccount, NewPassword, ProfileUpdate, RegistrationForm,
    ResetPasswordForm, ResetPasswordRequestForm, ResetRequest, TransferForm, TransferRequest,
    UserEditForm,
};
pub use pipeline::{process, submit, Processed};
pub use store::{MemoryUserStore, UserStore};
pub use types::{AccountStatus, Amount, TransferMode};
pub use validation::{FieldErrors, Validation};

// Re-export the field validators so callers need only one dependency
pub use tellerform_validation as validators;
