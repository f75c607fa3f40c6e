//! Tenant registration and lookup service.
//!
//! Implements [`TenantCommand`] and [`TenantQuery`] on top of a
//! [`TenantRepository`]. The service keeps no namespace state of its own:
//! every uniqueness decision is delegated to the repository's atomic insert,
//! and a key collision is answered by drawing a fresh suffix, up to a bounded
//! number of attempts.

use std::num::NonZeroU32;
use std::sync::Arc;

use async_trait::async_trait;
use mockable::Clock;
use serde_json::json;
use tracing::{debug, error, info, warn};

use crate::domain::ports::{
    AllocationMetrics, KeySuffixSource, NoOpAllocationMetrics, RandomKeySuffixSource,
    RegisterTenantRequest, TenantCommand, TenantQuery, TenantRepository, TenantRepositoryError,
};
use crate::domain::slug::{MIN_SLUG_LEN, normalize_candidate, slug_len};
use crate::domain::{
    Availability, Error, OwnerRef, SlugCandidate, Tenant, TenantDisplayName, TenantKey,
    TenantPlan, TenantValidationError,
};

/// Allocation attempts made before reporting the namespace as exhausted.
pub const DEFAULT_ALLOCATION_ATTEMPTS: NonZeroU32 = match NonZeroU32::new(5) {
    Some(value) => value,
    None => unreachable!(),
};

/// Tenant service implementing the tenant driving ports.
#[derive(Clone)]
pub struct TenantService<R> {
    repository: Arc<R>,
    suffixes: Arc<dyn KeySuffixSource>,
    clock: Arc<dyn Clock>,
    metrics: Arc<dyn AllocationMetrics>,
    max_attempts: NonZeroU32,
}

impl<R> TenantService<R> {
    /// Create a service with random suffixes, no metrics and the default
    /// attempt budget.
    pub fn new(repository: Arc<R>, clock: Arc<dyn Clock>) -> Self {
        Self {
            repository,
            suffixes: Arc::new(RandomKeySuffixSource),
            clock,
            metrics: Arc::new(NoOpAllocationMetrics),
            max_attempts: DEFAULT_ALLOCATION_ATTEMPTS,
        }
    }

    #[must_use]
    pub fn with_suffix_source(mut self, suffixes: Arc<dyn KeySuffixSource>) -> Self {
        self.suffixes = suffixes;
        self
    }

    #[must_use]
    pub fn with_metrics(mut self, metrics: Arc<dyn AllocationMetrics>) -> Self {
        self.metrics = metrics;
        self
    }

    #[must_use]
    pub fn with_max_attempts(mut self, max_attempts: NonZeroU32) -> Self {
        self.max_attempts = max_attempts;
        self
    }
}

fn map_repository_error(error: TenantRepositoryError) -> Error {
    match error {
        TenantRepositoryError::Connection { message } => {
            Error::service_unavailable(format!("tenant repository unavailable: {message}"))
        }
        TenantRepositoryError::Query { message } => {
            Error::internal(format!("tenant repository error: {message}"))
        }
        TenantRepositoryError::KeyTaken { key } => {
            Error::internal(format!("unexpected tenant key conflict: {key}"))
        }
        TenantRepositoryError::OwnerTaken { .. } => owner_conflict(),
    }
}

fn owner_conflict() -> Error {
    Error::conflict("owner already has a tenant").with_details(json!({
        "field": "ownerRef",
        "code": "owner_has_tenant",
    }))
}

fn invalid_field(field: &'static str, err: &TenantValidationError) -> Error {
    Error::invalid_request(err.to_string()).with_details(json!({
        "field": field,
        "code": err.code(),
    }))
}

struct ValidRegistration {
    display_name: TenantDisplayName,
    candidate: SlugCandidate,
    owner: OwnerRef,
}

impl TryFrom<RegisterTenantRequest> for ValidRegistration {
    type Error = Error;

    fn try_from(request: RegisterTenantRequest) -> Result<Self, Self::Error> {
        let display_name = TenantDisplayName::new(&request.display_name)
            .map_err(|err| invalid_field("displayName", &err))?;
        let candidate = SlugCandidate::parse(&request.candidate_key)
            .map_err(|err| invalid_field("candidateKey", &err))?;
        let owner =
            OwnerRef::new(&request.owner_ref).map_err(|err| invalid_field("ownerRef", &err))?;
        Ok(Self {
            display_name,
            candidate,
            owner,
        })
    }
}

enum Outcome {
    Allocated,
    Collision,
    Exhausted,
}

impl<R> TenantService<R>
where
    R: TenantRepository,
{
    async fn record(&self, outcome: Outcome) {
        let result = match outcome {
            Outcome::Allocated => self.metrics.record_allocation().await,
            Outcome::Collision => self.metrics.record_collision().await,
            Outcome::Exhausted => self.metrics.record_exhaustion().await,
        };
        if let Err(err) = result {
            debug!(error = %err, "failed to record allocation metric");
        }
    }

    async fn ensure_owner_is_free(&self, owner: &OwnerRef) -> Result<(), Error> {
        let existing = self
            .repository
            .find_by_owner(owner)
            .await
            .map_err(map_repository_error)?;
        match existing {
            Some(_) => Err(owner_conflict()),
            None => Ok(()),
        }
    }

    async fn allocate(&self, registration: ValidRegistration) -> Result<Tenant, Error> {
        let ValidRegistration {
            display_name,
            candidate,
            owner,
        } = registration;
        let max_attempts = self.max_attempts.get();

        for attempt in 1..=max_attempts {
            let key = TenantKey::compose(&candidate, self.suffixes.draw());
            let tenant = Tenant::new(
                key,
                display_name.clone(),
                owner.clone(),
                TenantPlan::default(),
                self.clock.utc(),
            );

            match self.repository.insert(&tenant).await {
                Ok(()) => {
                    info!(
                        tenant_key = %tenant.key(),
                        owner_ref = %tenant.owner(),
                        attempt,
                        "tenant key allocated"
                    );
                    self.record(Outcome::Allocated).await;
                    return Ok(tenant);
                }
                Err(TenantRepositoryError::KeyTaken { key }) => {
                    warn!(
                        tenant_key = %key,
                        attempt,
                        max_attempts,
                        "tenant key collision, drawing a fresh suffix"
                    );
                    self.record(Outcome::Collision).await;
                }
                Err(err) => return Err(map_repository_error(err)),
            }
        }

        error!(
            candidate = %candidate,
            attempts = max_attempts,
            "tenant key namespace exhausted"
        );
        self.record(Outcome::Exhausted).await;
        Err(
            Error::namespace_exhausted("no unique tenant key could be allocated").with_details(
                json!({
                    "candidateKey": candidate.as_ref(),
                    "attempts": max_attempts,
                }),
            ),
        )
    }
}

#[async_trait]
impl<R> TenantCommand for TenantService<R>
where
    R: TenantRepository,
{
    async fn register(&self, request: RegisterTenantRequest) -> Result<Tenant, Error> {
        let registration = ValidRegistration::try_from(request)?;
        self.ensure_owner_is_free(&registration.owner).await?;
        self.allocate(registration).await
    }
}

#[async_trait]
impl<R> TenantQuery for TenantService<R>
where
    R: TenantRepository,
{
    async fn check_availability(&self, candidate: &str) -> Result<Availability, Error> {
        let normalized = normalize_candidate(candidate);
        if slug_len(&normalized) < MIN_SLUG_LEN {
            return Ok(Availability::too_short());
        }
        let key = TenantKey::parse(&normalized)
            .map_err(|err| invalid_field("candidate", &err))?;
        let existing = self
            .repository
            .find_by_key(&key)
            .await
            .map_err(map_repository_error)?;
        Ok(if existing.is_some() {
            Availability::taken()
        } else {
            Availability::available()
        })
    }

    async fn resolve(&self, tenant_key: &str) -> Result<Option<Tenant>, Error> {
        let Ok(key) = TenantKey::parse(tenant_key) else {
            return Ok(None);
        };
        self.repository
            .find_by_key(&key)
            .await
            .map_err(map_repository_error)
    }

    async fn owned_by(&self, owner_ref: &str) -> Result<Option<Tenant>, Error> {
        let owner = OwnerRef::new(owner_ref).map_err(|err| invalid_field("ownerRef", &err))?;
        self.repository
            .find_by_owner(&owner)
            .await
            .map_err(map_repository_error)
    }
}

#[cfg(test)]
#[path = "tenant_service_tests.rs"]
mod tests;
