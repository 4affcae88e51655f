use std::fmt;

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum RouteID {
    Main,
    Alternate,
}

impl RouteID {
    /// What the route label shows
    pub fn describe(self) -> &'static str {
        match self {
            RouteID::Main => "Main Route",
            RouteID::Alternate => "Alternate Route",
        }
    }

    pub fn short_name(self) -> &'static str {
        match self {
            RouteID::Main => "Main",
            RouteID::Alternate => "Alt",
        }
    }
}

impl fmt::Display for RouteID {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.describe())
    }
}
