//! Landing page: marketing copy plus the "Get Started" entry point.
//!
//! Everything here is presentational; the extraction and automation
//! claims have no implementation behind them.

use leptos::*;

use crate::ActiveTab;

struct Feature {
    icon: &'static str,
    title: &'static str,
    description: &'static str,
}

struct Step {
    number: &'static str,
    icon: &'static str,
    title: &'static str,
    description: &'static str,
}

const FEATURES: [Feature; 3] = [
    Feature {
        icon: "⚡",
        title: "AI-Powered Extraction",
        description: "Automatically extract information from your documents using advanced AI",
    },
    Feature {
        icon: "🛡️",
        title: "Secure Processing",
        description: "Your documents are processed securely with enterprise-grade encryption",
    },
    Feature {
        icon: "⏱️",
        title: "Save Time",
        description: "Reduce manual data entry by up to 90% with automated form filling",
    },
];

const STEPS: [Step; 4] = [
    Step {
        number: "1",
        icon: "📤",
        title: "Upload Documents",
        description: "Upload your documents organized by year",
    },
    Step {
        number: "2",
        icon: "📄",
        title: "AI Extraction",
        description: "Our AI extracts relevant information automatically",
    },
    Step {
        number: "3",
        icon: "✏️",
        title: "Review & Edit",
        description: "Review and edit the extracted data as needed",
    },
    Step {
        number: "4",
        icon: "⬇️",
        title: "Download Form",
        description: "Download your completed form instantly",
    },
];

#[component]
pub fn HeroSection(set_active_tab: WriteSignal<ActiveTab>) -> impl IntoView {
    let on_get_started = move |_| set_active_tab.set(ActiveTab::Upload);

    view! {
        <div class="hero">
            <div class="hero-header">
                <span class="hero-badge">"Professional Document Processing"</span>
                <h1 class="hero-title">
                    "Transform Documents into"
                    <span class="hero-title-accent">"Filled Forms"</span>
                </h1>
                <p class="hero-subtitle">
                    "Upload your documents, let AI extract the information, and download "
                    "perfectly filled forms. Streamline your document processing workflow "
                    "with our intelligent automation platform."
                </p>
                <div class="hero-actions">
                    <button class="btn btn-primary btn-lg" on:click=on_get_started>
                        "📤 Get Started Now"
                    </button>
                    <button class="btn btn-secondary btn-lg">
                        "📄 View Demo"
                    </button>
                </div>
            </div>

            <div class="hero-features">
                {FEATURES
                    .iter()
                    .map(|feature| {
                        view! {
                            <div class="feature-card">
                                <div class="feature-icon">{feature.icon}</div>
                                <h3 class="feature-title">{feature.title}</h3>
                                <p class="feature-description">{feature.description}</p>
                            </div>
                        }
                    })
                    .collect_view()}
            </div>

            <div class="hero-steps">
                <div class="hero-steps-header">
                    <h2>"How It Works"</h2>
                    <p>"Simple steps to transform your documents"</p>
                </div>
                <div class="hero-steps-grid">
                    {STEPS
                        .iter()
                        .map(|step| {
                            view! {
                                <div class="step">
                                    <div class="step-number">{step.number}</div>
                                    <div class="step-icon">{step.icon}</div>
                                    <h3 class="step-title">{step.title}</h3>
                                    <p class="step-description">{step.description}</p>
                                </div>
                            }
                        })
                        .collect_view()}
                </div>
            </div>
        </div>
    }
}
