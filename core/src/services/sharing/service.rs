//! Access sharing service
//!
//! Patients share their records by handing a one-time code to hospital
//! staff. Staff redeem the code together with the patient's username.

use std::sync::Arc;
use tracing::{info, warn};

use crate::domain::entities::access_log::{AccessAction, Accessor};
use crate::domain::entities::patient::PatientProfile;
use crate::errors::{AccessError, DomainError, DomainResult};
use crate::repositories::{AccessLogRepository, PatientDirectory};
use crate::services::access::OtpAccessBroker;
use crate::services::audit::AccessAuditService;

use super::types::AccessGrant;

/// Issues, redeems and revokes patients' one-time access codes
pub struct AccessSharingService<P, L>
where
    P: PatientDirectory,
    L: AccessLogRepository,
{
    broker: Arc<OtpAccessBroker>,
    patients: Arc<P>,
    audit: AccessAuditService<L>,
}

impl<P, L> AccessSharingService<P, L>
where
    P: PatientDirectory,
    L: AccessLogRepository,
{
    pub fn new(broker: Arc<OtpAccessBroker>, patients: Arc<P>, access_logs: Arc<L>) -> Self {
        Self {
            broker,
            patients,
            audit: AccessAuditService::new(access_logs),
        }
    }

    /// Issue a new access code for `username`
    ///
    /// # Returns
    /// * `Ok(AccessGrant)` - The code with its expiry and QR payload
    /// * `Err(DomainError::NotFound)` - No such patient
    pub async fn share_access(&self, username: &str) -> DomainResult<AccessGrant> {
        let patient = self
            .patients
            .find_by_username(username)
            .await?
            .ok_or_else(|| DomainError::NotFound {
                resource: format!("patient '{}'", username.trim()),
            })?;

        let entry = self.broker.issue_entry(&patient.username).await?;
        let expires_in_seconds = entry.time_until_expiration(self.broker.now()).num_seconds();

        info!(
            event = "access_shared",
            user_id = %patient.user_id,
            expires_in_seconds,
            "Patient issued an access code"
        );

        Ok(AccessGrant {
            qr_payload: patient.username.clone(),
            username: patient.username,
            code: entry.code,
            expires_at: entry.expires_at,
            expires_in_seconds,
        })
    }

    /// Redeem a code presented by hospital staff
    ///
    /// Every failure, unknown patient and directory errors included, is
    /// reported as [`AccessError::InvalidOrExpiredCode`].
    pub async fn redeem_access(
        &self,
        username: &str,
        code: &str,
        accessor_id: &str,
    ) -> DomainResult<PatientProfile> {
        let patient = match self.patients.find_by_username(username).await {
            Ok(Some(patient)) => patient,
            Ok(None) => {
                info!(event = "access_denied", reason = "unknown_patient");
                return Err(AccessError::InvalidOrExpiredCode.into());
            }
            Err(e) => {
                warn!(event = "access_denied", reason = "directory_error", error = %e);
                return Err(AccessError::InvalidOrExpiredCode.into());
            }
        };

        if !self.broker.verify(&patient.username, code).await {
            info!(event = "access_denied", user_id = %patient.user_id, reason = "code_rejected");
            return Err(AccessError::InvalidOrExpiredCode.into());
        }

        self.audit
            .log_access(
                &patient.user_id,
                &Accessor::hospital_staff(accessor_id),
                AccessAction::GrantedAccess,
                Some("Access granted with one-time code".to_string()),
            )
            .await;

        info!(
            event = "access_granted",
            user_id = %patient.user_id,
            accessor_id = %accessor_id,
            "Hospital staff redeemed an access code"
        );

        Ok(patient)
    }

    /// Withdraw a pending code before it is used
    ///
    /// # Returns
    /// * `Ok(true)` - A pending code was revoked
    /// * `Ok(false)` - Nothing was pending
    /// * `Err(DomainError::NotFound)` - No such patient
    pub async fn revoke_access(&self, username: &str) -> DomainResult<bool> {
        let patient = self
            .patients
            .find_by_username(username)
            .await?
            .ok_or_else(|| DomainError::NotFound {
                resource: format!("patient '{}'", username.trim()),
            })?;

        let revoked = self.broker.revoke(&patient.username).await;
        if revoked {
            self.audit
                .log_access(
                    &patient.user_id,
                    &Accessor::patient(patient.user_id.clone()),
                    AccessAction::RevokedAccess,
                    None,
                )
                .await;
        }

        Ok(revoked)
    }
}
