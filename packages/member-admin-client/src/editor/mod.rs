//! Row edit, save and delete flows.

use member_admin_core::error::{AdminError, Result};
use member_admin_core::model::{MemberRecord, MemberSummary, RowField, RowValues};
use member_admin_core::notification::{
    DeleteConfirmation, Notification, NotificationSurface, DELETE_DENIED, DELETE_SUCCESS,
    UPDATE_DENIED, UPDATE_SUCCESS,
};
use member_admin_core::row::MemberTable;
use member_admin_core::validation::{validate_row, ValidationPolicy};

use crate::gateway::MemberGateway;


/// Coordinates the member table, validation, persistence and notifications.
pub struct MemberEditor<G> {
    gateway: G,
    table: MemberTable,
    surface: NotificationSurface,
    policy: ValidationPolicy,
}

impl<G: MemberGateway> MemberEditor<G> {
    pub fn new(gateway: G, policy: ValidationPolicy) -> Self {
        Self {
            gateway,
            table: MemberTable::new(),
            surface: NotificationSurface::new(),
            policy,
        }
    }

    pub fn gateway(&self) -> &G {
        &self.gateway
    }

    pub fn table(&self) -> &MemberTable {
        &self.table
    }

    pub fn surface(&self) -> &NotificationSurface {
        &self.surface
    }

    pub fn surface_mut(&mut self) -> &mut NotificationSurface {
        &mut self.surface
    }

    /// Fetches the member list and rebuilds the table from it.
    ///
    /// Members without an id are returned for display but get no row.
    pub async fn load(&mut self) -> Result<Vec<MemberSummary>> {
        let members = self.gateway.list().await?;
        let collection = self.gateway.collection_path().to_string();
        self.table.replace_all(members.iter().filter_map(|member| {
            member
                .resource_url(&collection)
                .map(|url| (url, member.to_row_values()))
        }));
        tracing::debug!("Loaded {} members, {} editable", members.len(), self.table.len());
        Ok(members)
    }

    /// Adds or replaces a single row.
    pub fn insert_row(&mut self, url: impl Into<String>, values: RowValues) {
        self.table.insert(url, values);
    }

    pub fn begin_edit(&mut self, url: &str) -> Result<()> {
        self.table.begin_edit(url)
    }

    pub fn edit_field(
        &mut self,
        url: &str,
        field: RowField,
        value: impl Into<String>,
    ) -> Result<()> {
        self.table.set_field(url, field, value)
    }

    pub fn cancel_edit(&mut self, url: &str) -> Result<()> {
        self.table.cancel_edit(url)
    }

    /// Validates the draft and sends it.
    ///
    /// On validation failure nothing is sent and the row stays editing.
    /// A 403 reverts the row to its snapshot. Any other failure leaves the
    /// draft in place so the operator can retry.
    pub async fn save(&mut self, url: &str) -> Result<MemberRecord> {
        let draft = self.table.draft(url)?.clone();

        let record = match validate_row(&draft, &self.policy) {
            Ok(record) => record,
            Err(errors) => {
                tracing::debug!("Save of {} blocked by {} field errors", url, errors.len());
                self.surface.show(Notification::validation(&errors));
                return Err(AdminError::Validation(errors));
            }
        };

        match self.gateway.update(url, &record).await {
            Ok(()) => {
                self.table.commit_edit(url, &record)?;
                self.surface.show(Notification::success(UPDATE_SUCCESS));
                tracing::info!("Member {} updated", url);
                Ok(record)
            }
            Err(AdminError::AuthorizationDenied(detail)) => {
                tracing::warn!("Update of {} denied: {}", url, detail);
                self.table.cancel_edit(url)?;
                self.surface.show(Notification::error(UPDATE_DENIED));
                Err(AdminError::AuthorizationDenied(detail))
            }
            Err(e) => {
                tracing::warn!("Update of {} failed: {}", url, e);
                self.surface.show(Notification::error(format!(
                    "Failed to update member: {}",
                    failure_detail(&e)
                )));
                Err(e)
            }
        }
    }

    /// Opens a delete confirmation for the row. Nothing is sent yet.
    pub fn request_delete(&mut self, url: &str) -> Result<()> {
        let row = self.table.get(url).ok_or_else(|| AdminError::RowNotFound {
            url: url.to_string(),
        })?;
        let label = match row.values().name.trim() {
            "" => url.to_string(),
            name => name.to_string(),
        };
        self.surface
            .request_confirmation(DeleteConfirmation::new(url, label));
        Ok(())
    }

    /// Operator declined; the pending confirmation is dropped.
    pub fn cancel_delete(&mut self) -> bool {
        self.surface.confirm().is_some()
    }

    /// Operator accepted the open confirmation.
    ///
    /// Returns `Ok(false)` without sending anything when no confirmation
    /// is pending.
    pub async fn confirm_delete(&mut self) -> Result<bool> {
        let Some(confirmation) = self.surface.confirm() else {
            return Ok(false);
        };
        self.delete_confirmed(confirmation).await
    }

    /// Deletes the member named by a confirmation the operator accepted.
    async fn delete_confirmed(&mut self, confirmation: DeleteConfirmation) -> Result<bool> {
        let url = confirmation.url();
        match self.gateway.delete(url).await {
            Ok(()) => {
                self.table.remove(url);
                self.surface.show(Notification::success(DELETE_SUCCESS));
                tracing::info!("Member {} deleted", url);
                Ok(true)
            }
            Err(AdminError::AuthorizationDenied(detail)) => {
                tracing::warn!("Delete of {} denied: {}", url, detail);
                self.surface.show(Notification::error(DELETE_DENIED));
                Err(AdminError::AuthorizationDenied(detail))
            }
            Err(e) => {
                tracing::warn!("Delete of {} failed: {}", url, e);
                let message = match &e {
                    AdminError::RequestFailure { status, .. } => {
                        format!("Failed to delete member (status {})", status)
                    }
                    other => format!("Failed to delete member: {}", failure_detail(other)),
                };
                self.surface.show(Notification::error(message));
                Err(e)
            }
        }
    }
}

fn failure_detail(error: &AdminError) -> String {
    match error {
        AdminError::RequestFailure { message, .. } => message.clone(),
        AdminError::TransportFailure(detail) => detail.clone(),
        other => other.to_string(),
    }
}
