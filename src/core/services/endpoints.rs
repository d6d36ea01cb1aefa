// URL builders for the activities API

pub fn activities_url(base: &str) -> String {
    format!("{}/activities", base)
}

/// `POST` registers, `DELETE` unregisters; both take the same URL.
pub fn signup_url(base: &str, activity: &str, email: &str) -> String {
    format!(
        "{}/activities/{}/signup?email={}",
        base,
        urlencoding::encode(activity),
        urlencoding::encode(email)
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn list_url_is_relative_by_default() {
        assert_eq!(activities_url(""), "/activities");
        assert_eq!(activities_url("https://school.example"), "https://school.example/activities");
    }

    #[test]
    fn signup_url_encodes_name_and_email() {
        assert_eq!(
            signup_url("", "Chess Club", "a@b.com"),
            "/activities/Chess%20Club/signup?email=a%40b.com"
        );
    }

    #[test]
    fn reserved_characters_cannot_escape_their_segment() {
        assert_eq!(
            signup_url("", "Art/Design & Co", "x+y@b.com"),
            "/activities/Art%2FDesign%20%26%20Co/signup?email=x%2By%40b.com"
        );
    }
}
