use indexmap::IndexMap;
use serde::Serialize;

/// Static reference vocabularies for the film industry. Loaded once at
/// process start, shared by immutable reference, and exported verbatim
/// alongside generated data so a consumer can validate generated values
/// against them.
#[derive(Debug, Clone, Serialize)]
pub struct Vocabularies {
    pub locations: IndexMap<String, Vec<String>>,
    pub categories: Vec<String>,
    pub skills: Vec<String>,
}

impl Vocabularies {
    pub fn film_industry() -> Self {
        let mut locations = IndexMap::new();
        for (region, cities) in [
            (
                "United States",
                vec!["Los Angeles", "New York", "Atlanta", "Chicago", "Austin", "San Francisco"],
            ),
            (
                "India",
                vec!["Mumbai", "Chennai", "Hyderabad", "Kolkata", "Pune", "Bangalore"],
            ),
            ("United Kingdom", vec!["London", "Manchester", "Glasgow", "Cardiff"]),
            ("France", vec!["Paris", "Cannes", "Lyon"]),
            ("Germany", vec!["Berlin", "Munich", "Hamburg"]),
            ("Italy", vec!["Rome", "Milan", "Venice"]),
            ("Spain", vec!["Madrid", "Barcelona", "Valencia"]),
            ("Canada", vec!["Toronto", "Vancouver", "Montreal"]),
        ] {
            locations.insert(
                region.to_string(),
                cities.into_iter().map(String::from).collect(),
            );
        }

        let categories = [
            "Director", "Producer", "Cinematographer", "Editor", "Sound Designer",
            "Production Designer", "Costume Designer", "Makeup Artist", "Visual Effects",
            "Screenwriter", "Casting Director", "Location Manager", "Script Supervisor",
            "Gaffer", "Grip", "Boom Operator", "Assistant Director", "Stunt Coordinator",
        ]
        .into_iter()
        .map(String::from)
        .collect();

        let skills = [
            "Final Cut Pro", "Avid Media Composer", "Adobe Premiere Pro", "After Effects",
            "Cinema 4D", "Maya", "Blender", "Pro Tools", "Logic Pro", "RED Camera",
            "ARRI Alexa", "Steadicam", "Drone Operation", "Color Grading", "Foley",
            "Motion Graphics", "Storyboarding", "Script Analysis", "Budgeting",
        ]
        .into_iter()
        .map(String::from)
        .collect();

        Self {
            locations,
            categories,
            skills,
        }
    }

    /// All cities across every region, in region order then city order.
    pub fn flattened_locations(&self) -> Vec<&str> {
        self.locations
            .values()
            .flatten()
            .map(String::as_str)
            .collect()
    }
}
