use yew::prelude::*;

use crate::config;

const FOOTER_LINK: &str = "hover:text-cyan-400 cursor-pointer transition-colors";

#[function_component(Footer)]
pub fn footer() -> Html {
    html! {
        <footer class="py-24 px-6 bg-[#030303] border-t border-white/5" aria-labelledby="footer-heading">
            <h2 id="footer-heading" class="sr-only">{"Footer"}</h2>
            <div class="max-w-7xl mx-auto flex flex-col md:flex-row justify-between items-start md:items-center gap-16">
                <div>
                    <div class="flex items-center gap-3 mb-8">
                        <div class="w-12 h-12 bg-gradient-to-br from-cyan-400 to-purple-600 rounded-xl flex items-center justify-center font-bold text-black text-3xl" aria-hidden="true">{"W"}</div>
                        <span class="text-3xl font-black tracking-tighter">{"WAVILOG"}</span>
                    </div>
                    <p class="text-gray-500 max-w-xs text-base leading-relaxed">
                        {"The next generation of business intelligence. Bridging the gap between human creativity and autonomous execution."}
                    </p>
                </div>

                <div class="grid grid-cols-2 sm:grid-cols-3 gap-16">
                    <nav aria-labelledby="footer-services">
                        <h3 id="footer-services" class="font-bold mb-6 text-xs uppercase tracking-[0.3em] text-cyan-400">{"Services"}</h3>
                        <ul class="text-sm text-gray-500 space-y-3 font-medium">
                            <li><a href="#services" class={FOOTER_LINK}>{"SEO Performance"}</a></li>
                            <li><a href="#agents" class={FOOTER_LINK}>{"AI Workforce"}</a></li>
                            <li><a href="#automation" class={FOOTER_LINK}>{"Workflow Sync"}</a></li>
                        </ul>
                    </nav>
                    <nav aria-labelledby="footer-company">
                        <h3 id="footer-company" class="font-bold mb-6 text-xs uppercase tracking-[0.3em] text-cyan-400">{"Company"}</h3>
                        <ul class="text-sm text-gray-500 space-y-3 font-medium">
                            <li><a href="#" class={FOOTER_LINK}>{"About Wavilog"}</a></li>
                            <li><a href="#" class={FOOTER_LINK}>{"Our Ethos"}</a></li>
                            <li><a href={config::support_link()} class={FOOTER_LINK}>{"Contact Support"}</a></li>
                        </ul>
                    </nav>
                </div>
            </div>
            <div class="max-w-7xl mx-auto mt-24 pt-10 border-t border-white/5 flex flex-col sm:flex-row justify-between text-xs text-gray-600 font-medium">
                <p>{"© 2025 Wavilog. Built for high performance."}</p>
                <nav class="flex gap-10 mt-6 sm:mt-0" aria-label="Legal Links">
                    <a href="#" class="hover:text-cyan-400 transition-colors">{"Privacy Policy"}</a>
                    <a href="#" class="hover:text-cyan-400 transition-colors">{"Terms of Service"}</a>
                </nav>
            </div>
        </footer>
    }
}
