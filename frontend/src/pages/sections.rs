use yew::prelude::*;

use crate::components::hero_background::HeroBackground;
use crate::components::reveal::Reveal;
use crate::config;

#[derive(Properties, PartialEq, Clone)]
pub struct HeroProps {
    /// Measured for the floating widget threshold.
    pub node_ref: NodeRef,
}

#[function_component]
pub fn Hero(props: &HeroProps) -> Html {
    html! {
        <section
            ref={props.node_ref.clone()}
            aria-labelledby="hero-title"
            class="relative pt-32 pb-20 px-6 min-h-screen flex flex-col items-center justify-center text-center overflow-hidden"
        >
            <HeroBackground />
            <div class="absolute top-1/4 left-1/2 -translate-x-1/2 w-[800px] h-[400px] bg-cyan-500/10 blur-[120px] rounded-full -z-10" aria-hidden="true"></div>

            <Reveal class="relative z-10">
                <span class="inline-block px-4 py-1.5 rounded-full glass border border-cyan-500/20 text-cyan-400 text-xs font-bold tracking-widest uppercase mb-6">
                    {"Future-Proof Your Business"}
                </span>
                <h1 id="hero-title" class="text-5xl md:text-8xl font-black mb-8 leading-[1.1] tracking-tighter">
                    {"Your Business, "}<br />
                    <span class="text-gradient">{"Powered by AI"}</span>
                </h1>
                <p class="max-w-2xl mx-auto text-gray-400 text-lg md:text-xl mb-10 leading-relaxed font-medium">
                    {"Wavilog bridges the gap between businesses and customers with ultra-fast, \
                      SEO-optimized websites and custom AI agents that scale while you sleep."}
                </p>
                <nav class="flex flex-col sm:flex-row gap-4 justify-center" aria-label="Hero Actions">
                    <a
                        href={config::contact_link()}
                        class="px-10 py-5 bg-cyan-500 hover:bg-cyan-400 text-black font-bold rounded-2xl text-lg transition-all shadow-[0_0_40px_rgba(0,255,255,0.4)] hover:scale-105 active:scale-95"
                        aria-label="Start conversation with Wavilog via WhatsApp"
                    >
                        {"Get Started via WhatsApp"}
                    </a>
                    <a href="#agents" class="px-10 py-5 glass border border-white/10 hover:border-white/20 text-white font-bold rounded-2xl text-lg transition-all">
                        {"Explore AI Agents"}
                    </a>
                </nav>
            </Reveal>
        </section>
    }
}

#[derive(Properties, PartialEq, Clone)]
pub struct ServicesProps {
    pub node_ref: NodeRef,
    /// Vertical shift of the decorative glows, in pixels.
    pub parallax_offset: f64,
}

const VISIBILITY_POINTS: [(&str, &str); 3] = [
    ("Technical SEO Excellence", "Advanced semantic markup and schema.org integration."),
    ("Ultra-Low Latency", "Server-side performance that scores 100 on Core Web Vitals."),
    ("Mobile Dominance", "Optimized for the modern thumb-scrolling consumer."),
];

#[function_component]
pub fn Services(props: &ServicesProps) -> Html {
    let offset = props.parallax_offset;
    html! {
        <section
            ref={props.node_ref.clone()}
            id="services"
            aria-labelledby="gap-title"
            class="relative py-24 px-6 bg-[#080808] overflow-hidden"
        >
            <div
                class="absolute top-0 right-0 w-[600px] h-[600px] bg-purple-500/5 blur-[120px] rounded-full pointer-events-none transition-transform duration-75 ease-out"
                style={format!("transform: translateY({}px)", offset)}
                aria-hidden="true"
            ></div>
            <div
                class="absolute bottom-0 left-0 w-[400px] h-[400px] bg-cyan-500/5 blur-[100px] rounded-full pointer-events-none transition-transform duration-75 ease-out"
                style={format!("transform: translateY({}px)", -offset * 0.5)}
                aria-hidden="true"
            ></div>

            <div class="max-w-7xl mx-auto grid md:grid-cols-2 gap-16 items-center relative z-10">
                <Reveal class="delay-100">
                    <h2 id="gap-title" class="text-4xl md:text-6xl font-bold mb-8 leading-tight">
                        {"Dominating "}
                        <span class="text-cyan-400 underline decoration-cyan-400/30">{"Google Rankings"}</span>
                        {" with AI Speed."}
                    </h2>
                    <p class="text-gray-400 text-lg mb-8 leading-relaxed">
                        {"In a mobile-first world, visibility is everything. Wavilog moves your business to the forefront \
                          using clean, ultra-high-performance architecture that is highly SEO compliant."}
                    </p>
                    <div class="space-y-6">
                        { for VISIBILITY_POINTS.iter().enumerate().map(|(i, (title, desc))| html! {
                            <div key={i} class="flex gap-4">
                                <div class="w-12 h-12 glass rounded-xl flex items-center justify-center text-cyan-400 font-bold border border-white/5" aria-hidden="true">
                                    {format!("0{}", i + 1)}
                                </div>
                                <div>
                                    <h3 class="font-bold text-white text-lg">{*title}</h3>
                                    <p class="text-gray-500 text-sm">{*desc}</p>
                                </div>
                            </div>
                        }) }
                    </div>
                </Reveal>
                <Reveal class="delay-300 relative">
                    <div class="aspect-square glass rounded-[2.5rem] border border-white/10 overflow-hidden relative p-12 flex flex-col justify-end shadow-2xl">
                        <div class="absolute top-1/2 left-1/2 -translate-x-1/2 -translate-y-1/2 w-3/4 h-3/4 bg-cyan-500/5 blur-[100px] rounded-full" aria-hidden="true"></div>
                        <div class="space-y-6 relative z-10">
                            <div class="h-4 w-1/2 bg-white/5 rounded-full"></div>
                            <div class="h-4 w-3/4 bg-cyan-400/20 rounded-full"></div>
                            <div class="h-4 w-2/3 bg-white/5 rounded-full"></div>
                            <div class="h-48 w-full glass rounded-3xl border border-cyan-400/20 flex items-center justify-center text-cyan-400 font-black text-3xl tracking-tighter shadow-[inset_0_0_20px_rgba(0,255,255,0.05)]">
                                {"SEO POWERED"}
                            </div>
                        </div>
                    </div>
                </Reveal>
            </div>
        </section>
    }
}

struct Card {
    title: &'static str,
    desc: &'static str,
    icon: &'static str,
}

const AGENT_CARDS: [Card; 3] = [
    Card {
        title: "Lead Qualification",
        desc: "Smart filtering of incoming traffic to identify hot prospects instantly.",
        icon: "🎯",
    },
    Card {
        title: "Omnichannel Nurture",
        desc: "Automated engagement via Email, WhatsApp, and SMS triggered by behavior.",
        icon: "🔄",
    },
    Card {
        title: "AI Voice Concierge",
        desc: "Human-like voice agents that book meetings directly into your CRM.",
        icon: "📅",
    },
];

#[function_component(Agents)]
pub fn agents() -> Html {
    html! {
        <section class="py-24 px-6" id="agents" aria-labelledby="agents-title">
            <div class="max-w-7xl mx-auto text-center mb-16">
                <Reveal tag="h2" id="agents-title" class="text-4xl md:text-6xl font-bold mb-6">
                    {"Autonomous "}<span class="text-gradient">{"Workforce"}</span>
                </Reveal>
                <p class="text-gray-400 max-w-2xl mx-auto text-lg">
                    {"Our custom agents are built on enterprise-grade LLMs to qualify leads, handle support, \
                      and close sales without human intervention."}
                </p>
            </div>
            <div class="max-w-7xl mx-auto grid sm:grid-cols-2 lg:grid-cols-3 gap-8">
                { for AGENT_CARDS.iter().map(|card| html! {
                    <Reveal
                        key={card.title}
                        tag="article"
                        class="glass p-10 rounded-[2rem] border border-white/10 hover:border-cyan-500/40 group hover:-translate-y-2"
                    >
                        <div class="text-5xl mb-8 transform group-hover:scale-110 transition-transform" aria-hidden="true">{card.icon}</div>
                        <h3 class="text-2xl font-bold mb-4 group-hover:text-cyan-400 transition-colors">{card.title}</h3>
                        <p class="text-gray-500 leading-relaxed text-sm md:text-base">{card.desc}</p>
                    </Reveal>
                }) }
            </div>
        </section>
    }
}

const VOICE_BARS: [u32; 9] = [1, 2, 3, 4, 5, 4, 3, 2, 1];
const VOICE_PERKS: [&str; 3] = [
    "Zero Latency Response",
    "Unlimited Concurrent Calls",
    "CRM Deep Integration",
];

#[function_component(Voice)]
pub fn voice() -> Html {
    html! {
        <section class="py-24 px-6 bg-cyan-950/20" aria-labelledby="voice-title">
            <div class="max-w-7xl mx-auto flex flex-col md:flex-row items-center gap-16">
                <Reveal class="md:w-1/2 order-2 md:order-1">
                    <div class="relative group cursor-pointer" aria-label="Simulated AI Voice Activity">
                        <div class="absolute -inset-1 bg-gradient-to-r from-cyan-400 to-purple-600 rounded-[2.5rem] blur opacity-25 group-hover:opacity-50 transition duration-1000" aria-hidden="true"></div>
                        <div class="relative px-8 py-20 glass rounded-[2.5rem] border border-white/10 flex items-center justify-center overflow-hidden">
                            <div class="flex gap-3">
                                { for VOICE_BARS.iter().enumerate().map(|(i, h)| html! {
                                    <div
                                        key={i}
                                        class="w-3 bg-cyan-400 rounded-full animate-pulse"
                                        style={format!("height: {}px; animation-delay: {:.1}s", h * 15, i as f64 * 0.1)}
                                    ></div>
                                }) }
                            </div>
                        </div>
                    </div>
                </Reveal>
                <Reveal class="md:w-1/2 order-1 md:order-2">
                    <h2 id="voice-title" class="text-4xl md:text-6xl font-bold mb-8">{"24/7 Human-Level "}<br />{"Voice Sales"}</h2>
                    <p class="text-gray-400 text-lg mb-8 leading-relaxed">
                        {"Eliminate missed calls. Wavilog AI voice agents answer every inquiry instantly with perfect \
                          brand tone and objective focus."}
                    </p>
                    <ul class="space-y-4 text-gray-300">
                        { for VOICE_PERKS.iter().map(|perk| html! {
                            <li key={*perk} class="flex items-center gap-4 text-lg">
                                <span class="w-8 h-8 rounded-full bg-cyan-500/10 flex items-center justify-center text-cyan-400 font-bold" aria-hidden="true">{"✓"}</span>
                                {*perk}
                            </li>
                        }) }
                    </ul>
                </Reveal>
            </div>
        </section>
    }
}

struct Persona {
    role: &'static str,
    trait_name: &'static str,
    color: &'static str,
    icon: &'static str,
}

const PERSONAS: [Persona; 3] = [
    Persona {
        role: "Strategic Analyst",
        trait_name: "Analytical",
        color: "from-blue-500",
        icon: "📊",
    },
    Persona {
        role: "Legal Navigator",
        trait_name: "Compliant",
        color: "from-amber-500",
        icon: "⚖️",
    },
    Persona {
        role: "Growth Architect",
        trait_name: "Optimized",
        color: "from-cyan-500",
        icon: "🚀",
    },
];

#[function_component(Specialists)]
pub fn specialists() -> Html {
    html! {
        <section class="py-24 px-6" id="specialists" aria-labelledby="specialists-title">
            <div class="max-w-7xl mx-auto">
                <Reveal tag="h2" id="specialists-title" class="text-4xl font-bold mb-16 text-center">
                    {"Niche Expert Intelligence"}
                </Reveal>
                <div class="grid md:grid-cols-3 gap-8">
                    { for PERSONAS.iter().map(|persona| html! {
                        <Reveal
                            key={persona.role}
                            tag="article"
                            class="glass group relative overflow-hidden rounded-3xl border border-white/10 p-1 hover:border-white/20"
                        >
                            <div
                                class={classes!("absolute", "top-0", "left-0", "w-full", "h-1", "bg-gradient-to-r", persona.color, "to-transparent", "opacity-50")}
                                aria-hidden="true"
                            ></div>
                            <div class="p-8">
                                <div class="text-4xl mb-4 transform group-hover:scale-110 transition-transform" aria-hidden="true">{persona.icon}</div>
                                <h3 class="text-2xl font-bold text-white mb-2">{persona.role}</h3>
                                <p class="text-cyan-400 font-mono text-sm mb-4">{format!("[{}]", persona.trait_name.to_uppercase())}</p>
                                <p class="text-gray-500 text-sm leading-relaxed">
                                    {"Trained on specialized industry logic to provide professional-grade interactions that maintain your brand's authority."}
                                </p>
                            </div>
                        </Reveal>
                    }) }
                </div>
            </div>
        </section>
    }
}

#[function_component(Support)]
pub fn support() -> Html {
    html! {
        <section class="py-24 px-6 bg-[#080808]" aria-labelledby="support-title">
            <div class="max-w-5xl mx-auto glass rounded-[3rem] p-12 md:p-20 text-center border border-white/10 relative overflow-hidden shadow-[0_0_100px_rgba(0,0,0,0.5)]">
                <div class="absolute top-0 right-0 w-96 h-96 bg-cyan-500/5 blur-[120px]" aria-hidden="true"></div>
                <Reveal tag="h2" id="support-title" class="text-4xl md:text-5xl font-bold mb-8">
                    {"Intelligent Deflection"}
                </Reveal>
                <p class="text-gray-400 text-lg mb-12 max-w-2xl mx-auto leading-relaxed">
                    {"Reduce support overhead by 80%. Our custom-trained widgets act as your 24/7 first line of defense, \
                      resolving queries using your company's actual knowledge base."}
                </p>
                <div class="flex justify-center" aria-label="Interactive AI Chat Preview">
                    <div class="w-full max-w-md glass rounded-[2rem] p-8 text-left border border-white/5 shadow-2xl">
                        <div class="flex gap-4 mb-6">
                            <div class="w-10 h-10 rounded-full bg-cyan-500 flex-shrink-0 flex items-center justify-center text-sm font-bold text-black" aria-hidden="true">{"U"}</div>
                            <div class="glass px-5 py-3 rounded-2xl text-sm text-gray-300">{"How do I track my order?"}</div>
                        </div>
                        <div class="flex gap-4">
                            <div class="w-10 h-10 rounded-full bg-purple-500 flex-shrink-0 flex items-center justify-center text-sm font-bold text-white" aria-hidden="true">{"AI"}</div>
                            <div class="bg-cyan-900/40 px-5 py-3 rounded-2xl text-sm text-cyan-100 border border-cyan-500/30">
                                {"Hi! I've sent a real-time tracking link to your registered email. Need anything else?"}
                            </div>
                        </div>
                    </div>
                </div>
            </div>
        </section>
    }
}

const WORKFLOW_STEPS: [&str; 4] = ["Ingest", "Logic", "Action", "Report"];

#[function_component(Workflows)]
pub fn workflows() -> Html {
    html! {
        <section class="py-24 px-6" id="automation" aria-labelledby="workflow-title">
            <div class="max-w-7xl mx-auto text-center">
                <Reveal tag="h2" id="workflow-title" class="text-4xl md:text-6xl font-bold mb-8">
                    {"Autonomous Workflows"}
                </Reveal>
                <p class="text-gray-400 max-w-2xl mx-auto mb-20 text-lg">
                    {"We design \"Set and Forget\" automations. From lead scraping to complex data synchronization, \
                      receive results directly where you work."}
                </p>
                <div class="grid md:grid-cols-4 gap-6">
                    { for WORKFLOW_STEPS.iter().enumerate().map(|(i, step)| html! {
                        <div key={*step} class="glass p-10 rounded-[2rem] border border-white/5 flex flex-col items-center hover:border-cyan-500/20 transition-all duration-500 group">
                            <div class="w-14 h-14 rounded-full border-2 border-cyan-500/30 flex items-center justify-center text-cyan-400 mb-6 font-black text-xl group-hover:bg-cyan-500 group-hover:text-black transition-all" aria-hidden="true">
                                {(i + 1).to_string()}
                            </div>
                            <h3 class="font-bold text-xl tracking-tight">{*step}</h3>
                        </div>
                    }) }
                </div>
            </div>
        </section>
    }
}

#[function_component(Control)]
pub fn control() -> Html {
    html! {
        <section class="py-24 px-6 bg-gradient-to-b from-transparent to-cyan-950/10" aria-labelledby="control-title">
            <div class="max-w-7xl mx-auto grid md:grid-cols-2 gap-20 items-center">
                <Reveal>
                    <h2 id="control-title" class="text-4xl md:text-6xl font-bold mb-10">{"WhatsApp as Your Command Center"}</h2>
                    <p class="text-gray-400 text-lg mb-12 leading-relaxed">
                        {"Manage your entire AI workforce via the world's most popular messaging app. No complex dashboards \
                          required. Just text your agent to trigger any operation."}
                    </p>
                    <div class="flex items-center gap-10">
                        <div class="text-center">
                            <div class="text-4xl font-black text-cyan-400 mb-1">{"99%"}</div>
                            <div class="text-xs uppercase tracking-[0.25em] text-gray-500 font-bold">{"Open Rate"}</div>
                        </div>
                        <div class="w-[1px] h-12 bg-white/10" aria-hidden="true"></div>
                        <div class="text-center">
                            <div class="text-4xl font-black text-cyan-400 mb-1">{"<1s"}</div>
                            <div class="text-xs uppercase tracking-[0.25em] text-gray-500 font-bold">{"Latency"}</div>
                        </div>
                    </div>
                </Reveal>
                <Reveal class="flex justify-center">
                    <div
                        class="w-80 h-[560px] glass rounded-[3.5rem] border-8 border-white/5 p-5 shadow-[0_50px_100px_rgba(0,0,0,0.6)] relative overflow-hidden"
                        role="img"
                        aria-label="Smartphone showing WhatsApp AI interaction"
                    >
                        <div class="absolute top-0 left-0 w-full h-10 bg-white/5 flex items-center justify-center" aria-hidden="true">
                            <div class="w-16 h-1 bg-white/10 rounded-full"></div>
                        </div>
                        <div class="mt-10 space-y-5">
                            <div class="ml-auto w-3/4 bg-cyan-600 p-4 rounded-[1.25rem] rounded-tr-none text-sm font-medium shadow-lg">{"Run market sentiment scan"}</div>
                            <div class="w-3/4 glass p-4 rounded-[1.25rem] rounded-tl-none text-sm border-cyan-500/20 leading-relaxed">
                                {"Scan complete. Positive trend detected in SaaS. Shall I prepare the outreach campaign?"}
                            </div>
                            <div class="ml-auto w-1/4 bg-cyan-600 p-4 rounded-[1.25rem] rounded-tr-none text-sm text-center font-bold">{"Yes"}</div>
                        </div>
                        <div class="absolute bottom-8 left-0 w-full px-8">
                            <div class="h-12 bg-white/5 rounded-full border border-white/10 flex items-center px-6 text-sm text-gray-500 font-medium">{"Type a message..."}</div>
                        </div>
                    </div>
                </Reveal>
            </div>
        </section>
    }
}
