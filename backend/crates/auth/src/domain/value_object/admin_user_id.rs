use kernel::id::Id;

pub struct AdminUserMarker;
pub type AdminUserId = Id<AdminUserMarker>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_admin_user_id_wraps_serial() {
        let id = AdminUserId::new(3);
        assert_eq!(id.get(), 3);
        assert_eq!(serde_json::to_value(id).unwrap(), serde_json::json!(3));
    }
}
