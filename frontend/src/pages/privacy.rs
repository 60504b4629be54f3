use yew::prelude::*;

use crate::config::SITE;

const LAST_UPDATED: &str = "January 11, 2026";

#[function_component(PrivacyPolicy)]
pub fn privacy_policy() -> Html {
    let bullets = |items: &[&'static str]| html! {
        <ul>
            { for items.iter().map(|item| html! { <li>{*item}</li> }) }
        </ul>
    };

    html! {
        <div class="legal-content">
            <div>
                <h1>{"Privacy Policy"}</h1>
                <p class="last-updated">{format!("Last updated: {}", LAST_UPDATED)}</p>

                <section>
                    <h2>{"Introduction"}</h2>
                    <p>
                        {format!("{} (\"we,\" \"our,\" or \"us\") is committed to protecting your privacy. \
                                  This Privacy Policy explains how we collect, use, disclose, and safeguard your \
                                  information when you use our lead automation and booking service.", SITE.site_name)}
                    </p>
                </section>

                <section>
                    <h2>{"Information We Collect"}</h2>
                    <h3>{"Information You Provide to Us"}</h3>
                    { bullets(&[
                        "Contact information (name, email address, phone number)",
                        "Company information (company name, industry, size)",
                        "Calendar and scheduling preferences",
                        "Lead qualification responses and form submissions",
                        "Payment and billing information",
                    ]) }
                    <h3>{"Information Collected Automatically"}</h3>
                    { bullets(&[
                        "Usage data and analytics",
                        "IP addresses and browser information",
                        "Cookies and similar tracking technologies",
                        "Device information and operating system",
                    ]) }
                    <h3>{"Information from Third Parties"}</h3>
                    { bullets(&[
                        "Calendar data from integrated calendar services",
                        "CRM data from connected platforms",
                        "Authentication data from SSO providers",
                    ]) }
                </section>

                <section>
                    <h2>{"How We Use Your Information"}</h2>
                    { bullets(&[
                        "Provide, operate, and maintain our service",
                        "Process bookings and calendar scheduling",
                        "Qualify and route leads according to your criteria",
                        "Send notifications and confirmations",
                        "Improve and optimize our service",
                        "Provide customer support",
                        "Analyze usage patterns and generate insights",
                        "Comply with legal obligations",
                        "Prevent fraud and maintain security",
                    ]) }
                </section>

                <section>
                    <h2>{"Sharing Your Information"}</h2>
                    <ul>
                        <li><strong>{"Service Providers: "}</strong>{"Third-party vendors who help us operate the service (hosting, analytics, payment processing)"}</li>
                        <li><strong>{"Integrated Services: "}</strong>{"Platforms you connect (calendar services, CRMs) as necessary to provide functionality"}</li>
                        <li><strong>{"Legal Requirements: "}</strong>{"When required by law or to protect our rights"}</li>
                        <li><strong>{"Business Transfers: "}</strong>{"In connection with a merger, acquisition, or sale of assets"}</li>
                    </ul>
                    <p>{"We do not sell your personal information to third parties."}</p>
                </section>

                <section>
                    <h2>{"Data Security"}</h2>
                    <p>{"We implement appropriate technical and organizational measures to protect your data, including:"}</p>
                    { bullets(&[
                        "Encryption of data in transit and at rest (AES-256)",
                        "Regular security audits and penetration testing",
                        "Access controls and authentication requirements",
                        "SOC 2 Type II compliance",
                        "Employee training on data protection",
                    ]) }
                    <p>{"However, no method of transmission over the Internet is 100% secure, and we cannot guarantee absolute security."}</p>
                </section>

                <section>
                    <h2>{"Data Retention"}</h2>
                    <p>{"We retain your information for as long as your account is active or as needed to provide services. After account closure, we retain data for:"}</p>
                    { bullets(&[
                        "Legal compliance (tax, accounting, audit requirements)",
                        "Dispute resolution",
                        "Fraud prevention",
                    ]) }
                    <p>{"You may request deletion of your data at any time, subject to legal retention requirements."}</p>
                </section>

                <section>
                    <h2>{"Your Rights"}</h2>
                    { bullets(&[
                        "Access your personal information",
                        "Correct inaccurate data",
                        "Request deletion of your data",
                        "Object to processing of your data",
                        "Request data portability",
                        "Withdraw consent",
                        "Opt-out of marketing communications",
                    ]) }
                    <p>{format!("To exercise these rights, contact us at {}.", SITE.contact_email)}</p>
                </section>

                <section>
                    <h2>{"Cookies"}</h2>
                    <p>{"We use cookies and similar technologies to provide and improve our service. Types of cookies we use:"}</p>
                    <ul>
                        <li><strong>{"Essential: "}</strong>{"Required for the service to function"}</li>
                        <li><strong>{"Analytics: "}</strong>{"Help us understand usage patterns"}</li>
                        <li><strong>{"Functional: "}</strong>{"Remember your preferences"}</li>
                    </ul>
                    <p>{"You can control cookies through your browser settings, but disabling certain cookies may limit functionality."}</p>
                </section>

                <section>
                    <h2>{"International Transfers"}</h2>
                    <p>{"Your information may be transferred to and processed in countries other than your own. We ensure appropriate safeguards are in place, including:"}</p>
                    { bullets(&[
                        "Standard contractual clauses",
                        "Privacy Shield certification (where applicable)",
                        "Adequacy decisions",
                    ]) }
                </section>

                <section>
                    <h2>{"Children's Privacy"}</h2>
                    <p>{"Our service is not intended for individuals under 18 years of age. We do not knowingly collect information from children."}</p>
                </section>

                <section>
                    <h2>{"Changes to This Policy"}</h2>
                    <p>{"We may update this Privacy Policy from time to time. We will notify you of material changes by email or through the service. Continued use after changes constitutes acceptance of the updated policy."}</p>
                </section>

                <section>
                    <h2>{"Contact Us"}</h2>
                    <p>
                        {"Questions about this policy? Email "}
                        <a href={format!("mailto:{}", SITE.contact_email)}>{SITE.contact_email}</a>
                    </p>
                </section>
            </div>
            <style>
                {r#"
                .legal-content {
                    min-height: 100vh;
                    padding: 6rem 2rem 4rem;
                    background: #f9fafb;
                    color: #111827;
                }
                .legal-content > div {
                    max-width: 800px;
                    margin: 0 auto;
                    background: #fff;
                    border: 1px solid #e5e7eb;
                    border-radius: 16px;
                    padding: 3rem;
                }
                .legal-content h1 {
                    font-size: 2rem;
                    margin-bottom: 0.5rem;
                }
                .last-updated {
                    color: #6b7280;
                    margin-bottom: 2rem;
                }
                .legal-content section {
                    margin: 2rem 0;
                }
                .legal-content h2 {
                    color: #2563eb;
                    font-size: 1.4rem;
                    margin-bottom: 1rem;
                }
                .legal-content h3 {
                    font-size: 1.1rem;
                    margin: 1rem 0 0.5rem 0;
                }
                .legal-content p, .legal-content li {
                    color: #4b5563;
                    line-height: 1.6;
                    margin-bottom: 0.75rem;
                }
                .legal-content ul {
                    padding-left: 1.25rem;
                }
                .legal-content a {
                    color: #2563eb;
                }
                @media (max-width: 768px) {
                    .legal-content > div {
                        padding: 1.5rem;
                    }
                }
                "#}
            </style>
        </div>
    }
}
