//! Role pool construction from a primary role choice

use rand::Rng;
use shared::{InvalidInputError, Role, RoleChoice, RolePool, UnknownRoleError};

/// Resolve the primary role, picking one at random for `RoleChoice::Random`
pub fn resolve_primary<R: Rng + ?Sized>(
    choice: &RoleChoice,
    available: &[Role],
    rng: &mut R,
) -> shared::Result<Role> {
    if available.is_empty() {
        return Err(InvalidInputError::new("no roles available to build a pool from").into());
    }

    match choice {
        RoleChoice::Random => Ok(available[rng.random_range(0..available.len())].clone()),
        RoleChoice::Fixed(role) if available.contains(role) => Ok(role.clone()),
        RoleChoice::Fixed(role) => Err(UnknownRoleError {
            role: role.to_string(),
            available_roles: available.iter().map(|r| r.to_string()).collect(),
        }
        .into()),
    }
}

/// Build the pool: every available role once, the primary role a second time
///
/// Returns the resolved primary role together with the pool.
pub fn build_role_pool<R: Rng + ?Sized>(
    choice: &RoleChoice,
    available: &[Role],
    rng: &mut R,
) -> shared::Result<(Role, RolePool)> {
    let primary = resolve_primary(choice, available, rng)?;

    let mut pool: RolePool = available.to_vec();
    pool.push(primary.clone());

    Ok((primary, pool))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use shared::CompError;

    #[test]
    fn test_fixed_primary_appears_twice() {
        let mut rng = StdRng::seed_from_u64(1);
        let choice = RoleChoice::Fixed(Role::new("Controller"));

        let (primary, pool) = build_role_pool(&choice, &Role::standard(), &mut rng).unwrap();

        assert_eq!(primary, Role::new("Controller"));
        assert_eq!(pool.len(), 5);
        assert_eq!(pool.iter().filter(|r| r.as_str() == "Controller").count(), 2);
        for role in Role::standard() {
            assert!(pool.contains(&role));
        }
    }

    #[test]
    fn test_random_primary_is_an_available_role() {
        let mut rng = StdRng::seed_from_u64(2);
        let available = Role::standard();
        let mut seen = std::collections::HashSet::new();

        for _ in 0..200 {
            let (primary, pool) =
                build_role_pool(&RoleChoice::Random, &available, &mut rng).unwrap();
            assert!(available.contains(&primary));
            assert_eq!(pool.iter().filter(|r| **r == primary).count(), 2);
            seen.insert(primary);
        }

        assert_eq!(seen.len(), 4);
    }

    #[test]
    fn test_unknown_primary_rejected() {
        let mut rng = StdRng::seed_from_u64(3);
        let choice = RoleChoice::Fixed(Role::new("Healer"));

        let err = build_role_pool(&choice, &Role::standard(), &mut rng).unwrap_err();
        assert!(matches!(err, CompError::UnknownRole(_)));
    }

    #[test]
    fn test_empty_available_rejected() {
        let mut rng = StdRng::seed_from_u64(4);

        let err = build_role_pool(&RoleChoice::Random, &[], &mut rng).unwrap_err();
        assert!(matches!(err, CompError::InvalidInput(_)));
    }
}
