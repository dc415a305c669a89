pub(crate) mod onboarding;
