use anyhow::Result;

#[derive(Clone, Debug, PartialEq)]
pub struct Hospital {
    pub name: String,
    pub available: bool,
}

/// Simulated hospital availability. Purely informational; routing never looks at this.
#[derive(Clone, Debug, PartialEq)]
pub struct Hospitals {
    list: Vec<Hospital>,
}

impl Hospitals {
    pub fn new(names: Vec<String>) -> Self {
        Self {
            list: names
                .into_iter()
                .map(|name| Hospital {
                    name,
                    available: true,
                })
                .collect(),
        }
    }

    /// Returns the line for the driver log
    pub fn set(&mut self, name: &str, available: bool) -> Result<String> {
        let hospital = match self.list.iter_mut().find(|h| h.name == name) {
            Some(h) => h,
            None => bail!("Unknown hospital {name}"),
        };
        hospital.available = available;
        let status = if available {
            "Available"
        } else {
            "Busy/Unavailable"
        };
        Ok(format!("{name} set to {status}"))
    }

    pub fn iter(&self) -> impl Iterator<Item = &Hospital> {
        self.list.iter()
    }

    pub fn count_available(&self) -> usize {
        self.list.iter().filter(|h| h.available).count()
    }
}

impl Default for Hospitals {
    fn default() -> Self {
        Self::new(
            ["City General", "St. Mary's", "Riverside Clinic"]
                .into_iter()
                .map(|x| x.to_string())
                .collect(),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn is_available(hospitals: &Hospitals, name: &str) -> Option<bool> {
        hospitals.iter().find(|h| h.name == name).map(|h| h.available)
    }

    #[test]
    fn toggle() {
        let mut hospitals = Hospitals::default();
        assert_eq!(hospitals.count_available(), 3);

        assert_eq!(
            hospitals.set("St. Mary's", false).unwrap(),
            "St. Mary's set to Busy/Unavailable"
        );
        assert_eq!(is_available(&hospitals, "St. Mary's"), Some(false));
        assert_eq!(hospitals.count_available(), 2);

        assert_eq!(
            hospitals.set("St. Mary's", true).unwrap(),
            "St. Mary's set to Available"
        );
        assert!(hospitals.set("Nowhere", true).is_err());
        assert_eq!(is_available(&hospitals, "Nowhere"), None);
    }
}
