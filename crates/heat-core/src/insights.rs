//! Curated narrative cards for the insights panel.

use serde::{Deserialize, Serialize};

/// One insight card. `icon` names a front-end icon glyph.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Insight {
    pub category: String,
    pub title: String,
    pub text: String,
    pub icon: String,
}

impl Insight {
    fn new(category: &str, title: &str, text: &str, icon: &str) -> Self {
        Self {
            category: category.to_string(),
            title: title.to_string(),
            text: text.to_string(),
            icon: icon.to_string(),
        }
    }
}

/// The five cards shown on the dashboard, in display order.
pub fn insights() -> Vec<Insight> {
    vec![
        Insight::new(
            "THE PROBLEM",
            "Almost Half of Peel is Dangerously Hot",
            "42% of our region is over 4°C hotter than nearby countryside. That's like adding \
             10 extra scorching summer days per year. Industrial areas and parking lots are \
             the worst offenders.",
            "thermometer",
        ),
        Insight::new(
            "WHY IT HAPPENS",
            "We Cut Down Trees, Heat Goes Up",
            "Simple math: Less green = More heat. When we replace trees and grass with \
             concrete and asphalt, we create heat traps. These surfaces absorb sunlight all \
             day and radiate heat all night.",
            "activity",
        ),
        Insight::new(
            "WHERE TO ACT",
            "Cool Zones Show Us What Works",
            "Claireville Conservation and forested areas stay 3-5°C cooler than downtown. \
             Copy their recipe: more trees, green spaces, and water features. Target \
             industrial zones and commercial districts first.",
            "map-pin",
        ),
        Insight::new(
            "THE SOLUTION",
            "Small Changes, Big Impact",
            "Plant trees to add just 10% more greenery → Cool temps by 1.5°C. Paint roofs \
             white → Reduce building heat by 30%. These aren't expensive - tree planting \
             costs less than treating heat-related illness.",
            "trending-down",
        ),
        Insight::new(
            "WHY ACT NOW",
            "It's Getting Worse Fast",
            "Peel is heating up 3.8°C every year - fastest in the Greater Toronto Area. If \
             we don't act now, heat waves will become the norm, not the exception. This \
             affects everyone: kids, elderly, your energy bills.",
            "alert-circle",
        ),
    ]
}
