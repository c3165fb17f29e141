//! Catalog - the read-only reference data store.

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

use crate::domain::foundation::{CatalogError, HarmId, MeasureRef, QuestionId, RiskFactorId};

use super::{
    AnswerOption, IllegalHarm, MeasureCondition, Question, RiskFactor, SafetyMeasure,
};

static BUILTIN: Lazy<Catalog> = Lazy::new(builtin_catalog);

/// The four read-only reference catalogs: questions, illegal harms, risk
/// factors, and safety measures.
///
/// Constructed once (either the built-in dataset or a YAML document) and
/// shared immutably; nothing in this crate mutates a catalog after load.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Catalog {
    questions: Vec<Question>,
    harms: Vec<IllegalHarm>,
    risk_factors: Vec<RiskFactor>,
    measures: Vec<SafetyMeasure>,
}

impl Catalog {
    /// Creates a catalog from its four constituent lists.
    pub fn new(
        questions: Vec<Question>,
        harms: Vec<IllegalHarm>,
        risk_factors: Vec<RiskFactor>,
        measures: Vec<SafetyMeasure>,
    ) -> Self {
        Self {
            questions,
            harms,
            risk_factors,
            measures,
        }
    }

    /// Returns the built-in reference dataset.
    pub fn builtin() -> &'static Catalog {
        &BUILTIN
    }

    /// Parses a catalog from a YAML document.
    pub fn from_yaml_str(yaml: &str) -> Result<Self, CatalogError> {
        serde_yaml::from_str(yaml).map_err(|e| CatalogError::Parse(e.to_string()))
    }

    /// The questionnaire, in presentation order.
    pub fn questions(&self) -> &[Question] {
        &self.questions
    }

    /// The illegal-harm catalog, in display order.
    pub fn harms(&self) -> &[IllegalHarm] {
        &self.harms
    }

    /// The risk-factor catalog.
    pub fn risk_factors(&self) -> &[RiskFactor] {
        &self.risk_factors
    }

    /// The safety-measure catalog, in evaluation/display order.
    pub fn measures(&self) -> &[SafetyMeasure] {
        &self.measures
    }

    /// Looks up a question by identifier.
    pub fn question(&self, id: &QuestionId) -> Result<&Question, CatalogError> {
        self.questions
            .iter()
            .find(|q| &q.id == id)
            .ok_or_else(|| CatalogError::not_found("question", id.as_str()))
    }

    /// Looks up an illegal harm by identifier.
    pub fn harm(&self, id: &HarmId) -> Result<&IllegalHarm, CatalogError> {
        self.harms
            .iter()
            .find(|h| &h.id == id)
            .ok_or_else(|| CatalogError::not_found("illegal harm", id.as_str()))
    }

    /// Looks up a safety measure by reference code.
    pub fn measure(&self, reference: &MeasureRef) -> Result<&SafetyMeasure, CatalogError> {
        self.measures
            .iter()
            .find(|m| &m.reference == reference)
            .ok_or_else(|| CatalogError::not_found("safety measure", reference.as_str()))
    }

    /// Returns true if the harm is part of the catalog.
    pub fn contains_harm(&self, id: &HarmId) -> bool {
        self.harms.iter().any(|h| &h.id == id)
    }

    /// Looks up a risk factor by identifier, if the catalog knows it.
    ///
    /// Derived risk-factor identifiers may come straight from answer option
    /// values, so a miss here is expected input, not an error.
    pub fn risk_factor(&self, id: &RiskFactorId) -> Option<&RiskFactor> {
        self.risk_factors.iter().find(|rf| &rf.id == id)
    }

    /// Returns the harms implied by a risk factor, or the empty slice for a
    /// risk factor the catalog does not know.
    pub fn implied_harms(&self, id: &RiskFactorId) -> &[HarmId] {
        self.risk_factor(id)
            .map(|rf| rf.implied_harms.as_slice())
            .unwrap_or(&[])
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self::builtin().clone()
    }
}

fn builtin_catalog() -> Catalog {
    let questions = vec![
        Question::multi(
            "q1",
            "Is your service any of the following service types?",
            vec![
                AnswerOption::new("socialMedia", "Social media service"),
                AnswerOption::new("gaming", "Gaming service"),
                AnswerOption::new("marketplace", "Marketplace or listing service"),
            ],
        ),
        Question::multi(
            "q2",
            "Does your service have any of the following functionalities that allow users \
             to communicate with one another?",
            vec![
                AnswerOption::new("directMessaging", "Direct messaging"),
                AnswerOption::new("commenting", "Commenting on content"),
                AnswerOption::new("postingImages", "Posting or sending images or videos"),
            ],
        ),
        Question::single(
            "q3",
            "How many monthly active UK users does your service have?",
            vec![
                AnswerOption::new("smallService", "Less than 700,000"),
                AnswerOption::new("largeService", "700,000 or more i.e. Large service"),
            ],
        ),
    ];

    let harms = vec![
        IllegalHarm::new("terrorism", "Terrorism"),
        IllegalHarm::new("hate", "Hate"),
        IllegalHarm::new("harassment", "Harassment, stalking threats and abuse"),
        IllegalHarm::new("drugs", "Drugs and psychoactive substances"),
    ];

    let risk_factors = vec![
        RiskFactor::new(
            "socialMedia",
            "Social media services",
            "Research shows that social media services can increase the risk of all kinds \
             of illegal harm. This may be due to more research on social media services, \
             or greater probability of risk due to the wide range of functionalities and \
             features on many social media services.",
            ["terrorism", "hate", "harassment", "drugs"],
        ),
        RiskFactor::new(
            "gaming",
            "Gaming services",
            "If your service is a gaming service, you should consider how it may bring \
             potential perpetrators in contact with other users and may create a space \
             where potentially illegal behaviour is normalised. Gaming services can allow \
             hateful content to spread and become sites of 'normalised harassment', where \
             name-calling or insults are part of user interactions. Gaming services can \
             also be created and modified by terrorist organisations as recruitment tools.",
            ["terrorism", "harassment"],
        ),
        RiskFactor::new(
            "marketplace",
            "Marketplace or listing services",
            "If your service is a marketplace or listings service, you should consider how \
             your service may be used by potential perpetrators to sell or buy illegal \
             goods or services. They are often used in purchase scams in fraud offences \
             and can also be used to raise funds that are used for potentially illegal \
             purposes such as terrorist activities. The ability to make online payments \
             on online marketplaces or listing services can increase the risk of harm.",
            ["terrorism", "drugs"],
        ),
        RiskFactor::new(
            "directMessaging",
            "Direct messaging",
            "There is a strong link between direct messaging and various offences due to \
             the closed nature of these messages. While direct messaging can enable users \
             to protect their privacy, direct messaging can be used to facilitate offences \
             or share illegal content in a way that is not immediately visible to the public.",
            ["hate", "harassment"],
        ),
        RiskFactor::new(
            "commenting",
            "Commenting on content",
            "Commenting on content can enable potential perpetrators to target users who \
             share content and to amplify or signpost to existing illegal content. For \
             example, potential perpetrators may share comments containing hateful content \
             on a user's post, sometimes with a coordinated group of users, as a means of \
             targeting the user who posted the content.",
            ["hate", "harassment"],
        ),
        RiskFactor::new(
            "postingImages",
            "Posting images or videos",
            "Posting images or videos can allow potential perpetrators to share illegal \
             content with many users in open channels of communication. Posting images is \
             a key functionality in the commission of image-based offences, for example, \
             users may be able to post 'memes' that include terrorist or hateful content.",
            ["terrorism", "hate", "drugs"],
        ),
        RiskFactor::new(
            "largeService",
            "Large service",
            "Services with 700,000 or more monthly active UK users are considered large \
             services. Large services may have greater resources to implement safety \
             measures but also have a greater potential impact if illegal content is \
             shared on their platform.",
            ["terrorism", "hate", "harassment", "drugs"],
        ),
    ];

    let measures = vec![
        SafetyMeasure::new(
            "M1",
            "Enhanced Content Moderation",
            "2 illegal harms assigned 'High' risk",
            MeasureCondition::HighRiskCount { min_count: 2 },
            "Implement real-time automated content moderation and expand human review \
             coverage.",
        ),
        SafetyMeasure::new(
            "M2",
            "Terrorism Response Protocol",
            "High risk of Terrorism",
            MeasureCondition::SpecificHarmHighRisk {
                harm_id: HarmId::from("terrorism"),
            },
            "Establish a rapid escalation and takedown process for terrorist content, \
             including staff training.",
        ),
        SafetyMeasure::new(
            "M3",
            "Community Reporting Boost",
            "Large service AND High risk of Hate",
            MeasureCondition::LargeServiceAndHighRisk {
                harm_id: HarmId::from("hate"),
            },
            "Increase visibility and ease of user reporting tools, with prioritisation \
             for hate-related content.",
        ),
        SafetyMeasure::new(
            "M4",
            "Restricted Media Sharing",
            "High risk of Drugs and psychoactive substances",
            MeasureCondition::SpecificHarmHighRisk {
                harm_id: HarmId::from("drugs"),
            },
            "Limit the ability to post or share images/videos in high-risk contexts or \
             implement pre-screening.",
        ),
        SafetyMeasure::new(
            "M5",
            "Private Messaging Safeguards",
            "High risk of Harassment, stalking threats and abuse",
            MeasureCondition::SpecificHarmHighRisk {
                harm_id: HarmId::from("harassment"),
            },
            "Introduce keywords detection and friction (e.g., message prompts) in direct \
             messages to reduce abuse",
        ),
    ];

    Catalog::new(questions, harms, risk_factors, measures)
}
