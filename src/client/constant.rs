pub const SITE_NAME: &str = "Mentee Updates Dashboard";
