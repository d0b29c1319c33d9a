use std::sync::OnceLock;

use chairfit_engine::{
    archetype,
    bmi::{self, Bmi, MAX_HEIGHT_CM, MAX_WEIGHT_KG, MIN_HEIGHT_CM, MIN_WEIGHT_KG},
    plan::{self, Phase},
    pricing,
    summary::{self, Summary},
    testimonial::{self, TESTIMONIALS},
    trajectory::{self, Projection},
};
use chairfit_model::{
    catalog::{Archetype, Testimonial},
    profile::{Plan, Profile},
};
use log::{debug, info, warn};
use regex::Regex;
use serde::Deserialize;
use strum::{Display, EnumIter};

use crate::{
    checkout::{CheckoutError, Order, PaymentDetails, PaymentProcessor, Receipt},
    clock::Clock,
};

/// Screens in the order the user walks through them.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Display, EnumIter)]
pub enum Screen {
    HeightWeight,
    ProfileSummary,
    PlanProjection,
    CreatingPlan,
    PlanReady,
    SalesPage,
    Checkout,
    Success,
}

impl Screen {
    pub fn next(&self) -> Option<Screen> {
        match self {
            Screen::HeightWeight => Some(Screen::ProfileSummary),
            Screen::ProfileSummary => Some(Screen::PlanProjection),
            Screen::PlanProjection => Some(Screen::CreatingPlan),
            Screen::CreatingPlan => Some(Screen::PlanReady),
            Screen::PlanReady => Some(Screen::SalesPage),
            Screen::SalesPage => Some(Screen::Checkout),
            Screen::Checkout => Some(Screen::Success),
            Screen::Success => None,
        }
    }

    /// Screens that only display derived values and need no answer.
    pub fn is_informational(&self) -> bool {
        matches!(
            self,
            Screen::ProfileSummary | Screen::PlanProjection | Screen::CreatingPlan | Screen::PlanReady
        )
    }
}

#[derive(Debug, thiserror::Error)]
pub enum FunnelError {
    #[error("expected screen {expected}, but the funnel is on {actual}")]
    WrongScreen { expected: Screen, actual: Screen },
    #[error("screen {0} needs an answer before moving on")]
    AnswerRequired(Screen),
    #[error("funnel already finished")]
    Finished,
    #[error("{field} of {value} is outside {min}..={max}")]
    OutOfRange {
        field: &'static str,
        value: u16,
        min: u16,
        max: u16,
    },
    #[error("invalid email address \"{0}\"")]
    InvalidEmail(String),
    #[error(transparent)]
    Checkout(#[from] CheckoutError),
}

type Result<T> = std::result::Result<T, FunnelError>;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BodyMetrics {
    pub height_cm: u16,
    pub weight_kg: u16,
    pub target_weight_kg: u16,
}

impl BodyMetrics {
    fn validate(&self) -> Result<()> {
        let checks = [
            ("height", self.height_cm, MIN_HEIGHT_CM, MAX_HEIGHT_CM),
            ("weight", self.weight_kg, MIN_WEIGHT_KG, MAX_WEIGHT_KG),
            ("target weight", self.target_weight_kg, MIN_WEIGHT_KG, MAX_WEIGHT_KG),
        ];
        match checks
            .into_iter()
            .find(|&(_, value, min, max)| !(min..=max).contains(&value))
        {
            Some((field, value, min, max)) => Err(FunnelError::OutOfRange {
                field,
                value,
                min,
                max,
            }),
            None => Ok(()),
        }
    }
}

fn email_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| {
        Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("valid email pattern")
    })
}

pub fn is_valid_email(email: &str) -> bool {
    email_pattern().is_match(email)
}

/// One user's walk through the quiz funnel. All state lives in memory and is
/// dropped with the session.
pub struct Funnel {
    profile: Profile,
    screen: Screen,
    clock: Box<dyn Clock>,
    processor: Box<dyn PaymentProcessor>,
    receipt: Option<Receipt>,
}

impl Funnel {
    pub fn new(
        profile: Profile,
        clock: Box<dyn Clock>,
        processor: Box<dyn PaymentProcessor>,
    ) -> Self {
        Self {
            profile,
            screen: Screen::HeightWeight,
            clock,
            processor,
            receipt: None,
        }
    }

    pub fn screen(&self) -> Screen {
        self.screen
    }

    pub fn profile(&self) -> &Profile {
        &self.profile
    }

    /// Quiz answers given before the height/weight screen.
    pub fn profile_mut(&mut self) -> &mut Profile {
        &mut self.profile
    }

    pub fn receipt(&self) -> Option<&Receipt> {
        self.receipt.as_ref()
    }

    fn expect_screen(&self, expected: Screen) -> Result<()> {
        if self.screen == expected {
            Ok(())
        } else {
            Err(FunnelError::WrongScreen {
                expected,
                actual: self.screen,
            })
        }
    }

    fn advance(&mut self) -> Result<Screen> {
        let next = self.screen.next().ok_or(FunnelError::Finished)?;
        info!("Moving from {} to {}", self.screen, next);
        self.screen = next;
        Ok(next)
    }

    pub fn submit_body_metrics(&mut self, metrics: BodyMetrics) -> Result<Bmi> {
        self.expect_screen(Screen::HeightWeight)?;
        metrics.validate()?;
        if metrics.target_weight_kg > metrics.weight_kg {
            warn!(
                "Target weight {} kg is above current weight {} kg",
                metrics.target_weight_kg, metrics.weight_kg
            );
        }

        let bmi = bmi::calculate(metrics.height_cm, metrics.weight_kg);
        debug!("Calculated BMI {}", bmi);
        self.profile.height_cm = metrics.height_cm;
        self.profile.weight_kg = metrics.weight_kg;
        self.profile.target_weight_kg = metrics.target_weight_kg;
        self.profile.body_mass_index = Some(bmi.value);
        self.advance()?;
        Ok(bmi)
    }

    /// Leaves an informational screen.
    pub fn proceed(&mut self) -> Result<Screen> {
        if self.screen == Screen::Success {
            Err(FunnelError::Finished)
        } else if !self.screen.is_informational() {
            Err(FunnelError::AnswerRequired(self.screen))
        } else {
            self.advance()
        }
    }

    pub fn submit_sales(&mut self, email: &str, plan: Plan) -> Result<()> {
        self.expect_screen(Screen::SalesPage)?;
        let email = email.trim();
        if !is_valid_email(email) {
            return Err(FunnelError::InvalidEmail(email.to_owned()));
        }

        self.profile.email = email.to_owned();
        self.profile.selected_plan = Some(plan);
        self.advance()?;
        Ok(())
    }

    pub async fn checkout(&mut self, payment: PaymentDetails) -> Result<Receipt> {
        self.expect_screen(Screen::Checkout)?;
        payment.validate()?;
        let email = payment.email.trim();
        if !is_valid_email(email) {
            return Err(FunnelError::InvalidEmail(email.to_owned()));
        }
        self.profile.email = email.to_owned();

        let plan = pricing::lookup(
            self.profile
                .selected_plan
                .unwrap_or(pricing::recommended().plan),
        );
        let order = Order {
            plan: plan.plan,
            amount_cents: plan.price_cents,
            email: self.profile.email.clone(),
        };
        info!("Checking out plan {} for {}", plan.title, order.email);
        let receipt = self.processor.charge(&order, &payment).await?;

        self.receipt = Some(receipt.clone());
        self.advance()?;
        Ok(receipt)
    }

    pub fn summary(&self) -> Summary {
        summary::summarize(&self.profile)
    }

    pub fn projection(&self) -> Projection {
        trajectory::project(&self.profile, self.clock.today())
    }

    pub fn archetype(&self) -> Archetype {
        archetype::matching(&self.profile)
    }

    pub fn testimonials(&self) -> Vec<&'static Testimonial> {
        testimonial::select(&TESTIMONIALS, &self.profile)
    }

    pub fn plan_phases(&self) -> [Phase; 3] {
        plan::phases(&self.profile)
    }
}

#[cfg(test)]
mod tests {
    use chrono::Utc;
    use strum::IntoEnumIterator;
    use uuid::Uuid;

    use crate::{checkout::MockPaymentProcessor, clock::MockClock};

    use super::*;

    fn funnel() -> Funnel {
        Funnel::new(
            Profile::new(),
            Box::new(MockClock::new()),
            Box::new(MockPaymentProcessor::new()),
        )
    }

    fn metrics(height_cm: u16, weight_kg: u16) -> BodyMetrics {
        BodyMetrics {
            height_cm,
            weight_kg,
            target_weight_kg: 60,
        }
    }

    #[test]
    fn screens_form_a_single_line() {
        let screens: Vec<_> = Screen::iter().collect();
        for pair in screens.windows(2) {
            assert_eq!(pair[0].next(), Some(pair[1]));
        }
        assert_eq!(Screen::Success.next(), None);
    }

    #[test]
    fn email_validation() {
        let test_data = [
            ("ana@example.com", true),
            ("a.b@c.co", true),
            ("ana@example", false),
            ("ana example@x.com", false),
            ("@example.com", false),
            ("", false),
        ];

        for (i, (email, valid)) in test_data.into_iter().enumerate() {
            assert_eq!(is_valid_email(email), valid, "Test case #{}", i);
        }
    }

    #[test]
    fn body_metrics_commit_bmi() {
        let mut funnel = funnel();
        let bmi = funnel.submit_body_metrics(metrics(170, 70)).unwrap();
        assert_eq!(bmi.value, 24.2);
        assert_eq!(funnel.profile().body_mass_index, Some(24.2));
        assert_eq!(funnel.profile().target_weight_kg, 60);
        assert_eq!(funnel.screen(), Screen::ProfileSummary);
    }

    #[test]
    fn body_metrics_out_of_range() {
        let mut funnel = funnel();
        let err = funnel.submit_body_metrics(metrics(230, 70)).unwrap_err();
        assert!(matches!(
            err,
            FunnelError::OutOfRange {
                field: "height",
                value: 230,
                ..
            }
        ));
        assert_eq!(funnel.screen(), Screen::HeightWeight);
        assert_eq!(funnel.profile().body_mass_index, None);
    }

    #[test]
    fn proceed_needs_an_informational_screen() {
        let mut funnel = funnel();
        assert!(matches!(
            funnel.proceed(),
            Err(FunnelError::AnswerRequired(Screen::HeightWeight))
        ));

        funnel.submit_body_metrics(metrics(160, 80)).unwrap();
        assert_eq!(funnel.proceed().unwrap(), Screen::PlanProjection);
        assert_eq!(funnel.proceed().unwrap(), Screen::CreatingPlan);
        assert_eq!(funnel.proceed().unwrap(), Screen::PlanReady);
        assert_eq!(funnel.proceed().unwrap(), Screen::SalesPage);
        assert!(matches!(
            funnel.proceed(),
            Err(FunnelError::AnswerRequired(Screen::SalesPage))
        ));
    }

    #[test]
    fn answers_on_wrong_screen_are_rejected() {
        let mut funnel = funnel();
        assert!(matches!(
            funnel.submit_sales("ana@example.com", Plan::Vip),
            Err(FunnelError::WrongScreen {
                expected: Screen::SalesPage,
                actual: Screen::HeightWeight
            })
        ));
    }

    #[test]
    fn sales_page_requires_valid_email() {
        let mut funnel = funnel();
        funnel.submit_body_metrics(metrics(170, 70)).unwrap();
        for _ in 0..4 {
            funnel.proceed().unwrap();
        }

        assert!(matches!(
            funnel.submit_sales("not-an-email", Plan::Vip),
            Err(FunnelError::InvalidEmail(_))
        ));
        assert_eq!(funnel.screen(), Screen::SalesPage);

        funnel.submit_sales(" ana@example.com ", Plan::Vip).unwrap();
        assert_eq!(funnel.profile().email, "ana@example.com");
        assert_eq!(funnel.profile().selected_plan, Some(Plan::Vip));
        assert_eq!(funnel.screen(), Screen::Checkout);
    }

    fn funnel_at_checkout(processor: MockPaymentProcessor) -> Funnel {
        let mut funnel = Funnel::new(
            Profile::new(),
            Box::new(MockClock::new()),
            Box::new(processor),
        );
        funnel.submit_body_metrics(metrics(170, 70)).unwrap();
        for _ in 0..4 {
            funnel.proceed().unwrap();
        }
        funnel.submit_sales("ana@example.com", Plan::Vip).unwrap();
        funnel
    }

    fn payment(email: &str) -> PaymentDetails {
        PaymentDetails {
            name: "Ana Souza".to_owned(),
            email: email.to_owned(),
            card_number: "4111 1111 1111 1111".to_owned(),
            expiry: "01/30".to_owned(),
            cvv: "123".to_owned(),
        }
    }

    #[tokio::test]
    async fn checkout_email_replaces_sales_email() {
        let mut processor = MockPaymentProcessor::new();
        processor
            .expect_charge()
            .withf(|order, _| order.email == "ana.souza@example.com")
            .times(1)
            .returning(|order, _| {
                Ok(Receipt {
                    reference: Uuid::nil(),
                    order: order.clone(),
                    paid_at: Utc::now(),
                })
            });

        let mut funnel = funnel_at_checkout(processor);
        funnel
            .checkout(payment(" ana.souza@example.com "))
            .await
            .unwrap();

        assert_eq!(funnel.profile().email, "ana.souza@example.com");
        assert_eq!(funnel.screen(), Screen::Success);
    }

    #[tokio::test]
    async fn checkout_rejects_malformed_email() {
        let mut processor = MockPaymentProcessor::new();
        processor.expect_charge().never();

        let mut funnel = funnel_at_checkout(processor);
        let err = funnel.checkout(payment("not an email")).await.unwrap_err();

        assert!(matches!(err, FunnelError::InvalidEmail(email) if email == "not an email"));
        assert_eq!(funnel.profile().email, "ana@example.com");
        assert_eq!(funnel.screen(), Screen::Checkout);
        assert_eq!(funnel.receipt(), None);
    }
}
