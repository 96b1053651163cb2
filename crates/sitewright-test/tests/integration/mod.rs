mod cli;
mod composition;
mod helpers;
mod onboarding;
