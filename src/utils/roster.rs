#![forbid(unsafe_code)]

// The roster is the only application data this server owns.  It is built once
// during runtime context initialization and never modified afterwards, so
// endpoint handlers can share a reference to it across requests without any
// synchronization.

// ***************************************************************************
//                               Roster Types
// ***************************************************************************
// ---------------------------------------------------------------------------
// UserRecord:
// ---------------------------------------------------------------------------
/** One roster entry.  There is no identifier field and uniqueness is not
 * enforced; if two records share a first name, lookup resolves to whichever
 * comes first in insertion order.
 */
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserRecord {
    pub first_name: String,
    pub last_name: String,
}

impl UserRecord {
    pub fn new(first_name: &str, last_name: &str) -> Self {
        Self {first_name: first_name.to_string(), last_name: last_name.to_string()}
    }
}

// ---------------------------------------------------------------------------
// Roster:
// ---------------------------------------------------------------------------
/** An immutable ordered collection of user records, fixed at process start.
 * Insertion order is stable and determines tie-break priority during lookup.
 */
#[derive(Debug)]
pub struct Roster {
    users: Vec<UserRecord>,
}

impl Roster {
    pub fn new(users: Vec<UserRecord>) -> Self {
        Self {users}
    }

    /** The fixed user list served by this installation. */
    pub fn standard() -> Self {
        Self::new(vec![
            UserRecord::new("Will",   "Byers"),
            UserRecord::new("Bob",    "Newby"),
            UserRecord::new("Mike",   "Wheeler"),
            UserRecord::new("Dustin", "Henderson"),
            UserRecord::new("Jim",    "Hopper"),
        ])
    }

    /** Find the first user whose first name equals the query string under
     * case-insensitive comparison.  Both sides are lowercased before the
     * comparison; no whitespace trimming or normalization takes place.  A
     * miss is a normal outcome, not an error.
     */
    pub fn find_user(&self, name: &str) -> Option<&UserRecord> {
        let folded = name.to_lowercase();
        self.users.iter().find(|u| u.first_name.to_lowercase() == folded)
    }

    #[allow(dead_code)]
    pub fn users(&self) -> &[UserRecord] {
        &self.users
    }
}

// ***************************************************************************
//                                  Tests
// ***************************************************************************
#[cfg(test)]
mod tests {
    use super::{Roster, UserRecord};

    #[test]
    fn find_user_matches_known_names() {
        let roster = Roster::standard();
        assert_eq!(roster.find_user("bob").unwrap().last_name, "Newby");
        assert_eq!(roster.find_user("JIM").unwrap().last_name, "Hopper");
        assert_eq!(roster.find_user("DuStIn").unwrap().last_name, "Henderson");
        assert_eq!(roster.find_user("mIKE").unwrap().last_name, "Wheeler");
    }

    #[test]
    fn find_user_is_case_insensitive() {
        let roster = Roster::standard();
        let exact = roster.find_user("Bob").unwrap();
        for variant in ["bob", "BOB", "bOb", "BoB"] {
            assert_eq!(roster.find_user(variant), Some(exact));
        }
    }

    #[test]
    fn find_user_misses_unknown_names() {
        let roster = Roster::standard();
        assert_eq!(roster.find_user("Bailey"), None);
    }

    #[test]
    fn find_user_does_not_trim_whitespace() {
        let roster = Roster::standard();
        assert_eq!(roster.find_user(" bob"), None);
        assert_eq!(roster.find_user("bob "), None);
    }

    #[test]
    fn find_user_rejects_empty_query() {
        // No roster record has an empty first name, so the empty string
        // can never match.
        let roster = Roster::standard();
        assert_eq!(roster.find_user(""), None);
    }

    #[test]
    fn find_user_returns_first_match_for_duplicates() {
        let roster = Roster::new(vec![
            UserRecord::new("Bob", "Newby"),
            UserRecord::new("bob", "Ross"),
        ]);
        assert_eq!(roster.find_user("BOB").unwrap().last_name, "Newby");
    }

    #[test]
    fn find_user_is_idempotent_and_leaves_roster_unchanged() {
        let roster = Roster::standard();
        let before: Vec<UserRecord> = roster.users().to_vec();

        let first = roster.find_user("dustin").cloned();
        for _ in 0..10 {
            assert_eq!(roster.find_user("dustin").cloned(), first);
            assert_eq!(roster.find_user("Bailey"), None);
        }

        assert_eq!(roster.users(), before.as_slice());
    }
}
