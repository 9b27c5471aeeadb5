// ============================================================================
// Domain Layer - Business Logic
// ============================================================================
//
// Each aggregate has its own subdirectory with its value objects, rules,
// errors and the service that drives it.
//
// ============================================================================

pub mod order;
