//! Global CSS styles for the landing page.
//!
//! Black canvas, white type, red call-to-action. Breakpoints follow the
//! usual 640 / 768 / 1024 / 1280 steps.

pub const GLOBAL_STYLES: &str = r#"
@import url('https://fonts.googleapis.com/css2?family=Bagel+Fat+One&family=Inter:wght@400;500;600;900&display=swap');

/* === CSS Custom Properties === */
:root {
  --black: #000000;
  --white: #ffffff;
  --white-80: rgba(255, 255, 255, 0.8);
  --white-20: rgba(255, 255, 255, 0.2);
  --white-10: rgba(255, 255, 255, 0.1);
  --red: #dc2626;
  --red-hover: #b91c1c;
  --red-active: #991b1b;

  --font-display: 'Bagel Fat One', system-ui, sans-serif;
  --font-body: 'Inter', system-ui, -apple-system, sans-serif;

  --gentle: 200ms ease;
  --bar: 300ms ease-out;
}

/* === Global Reset === */
*, *::before, *::after {
  box-sizing: border-box;
  margin: 0;
  padding: 0;
}

html {
  font-size: 16px;
  scroll-behavior: smooth;
  -webkit-font-smoothing: antialiased;
}

body {
  font-family: var(--font-body);
  background: var(--black);
  color: var(--white);
  min-height: 100vh;
}

a {
  color: inherit;
  text-decoration: none;
}

button {
  font: inherit;
  border: none;
}

/* === Hero === */
.hero {
  position: relative;
  height: 100vh;
  width: 100%;
  overflow: hidden;
  background: var(--black);
}

.hero-video {
  position: absolute;
  inset: 0;
  width: 100%;
  height: 100%;
  object-fit: cover;
  transform: scale(1.1);
}

.hero-title-wrap {
  position: absolute;
  bottom: 3rem;
  left: 1.5rem;
  z-index: 40;
  max-width: 42rem;
  animation: slide-in-left 1s ease 1.5s both;
}

.hero-title {
  font-size: 1.875rem;
  font-weight: 900;
  line-height: 1.25;
  color: var(--white);
}

.hero-title span {
  display: block;
}

/* === Navigation Bar === */
.navbar {
  position: fixed;
  top: 0;
  left: 0;
  right: 0;
  width: 100%;
  z-index: 110;
  animation: drop-in 0.8s ease 0.3s both;
}

.navbar-inner {
  width: 100%;
  padding: 1rem 1.5rem;
  background: transparent;
  border-bottom: 1px solid transparent;
  transition: all var(--bar);
}

.navbar-inner.scrolled {
  background: rgba(0, 0, 0, 0.8);
  backdrop-filter: blur(24px);
  -webkit-backdrop-filter: blur(24px);
  border-bottom-color: var(--white-10);
}

.navbar-row {
  display: flex;
  align-items: center;
  justify-content: space-between;
}

.wordmark {
  display: flex;
  align-items: center;
  cursor: pointer;
  font-family: var(--font-display);
  font-size: 1.25rem;
  letter-spacing: 0.05em;
  color: var(--white);
  transition: transform var(--gentle);
}

.wordmark:hover {
  transform: scale(1.05);
}

.nav-links {
  display: none;
  align-items: center;
  gap: 2rem;
}

.nav-link {
  font-weight: 500;
  color: var(--white);
  transition: color var(--gentle), transform var(--gentle);
}

.nav-link:hover {
  color: var(--white-80);
  transform: scale(1.05);
}

.nav-actions {
  position: relative;
  display: flex;
  align-items: center;
  gap: 0.75rem;
}

/* === Mute Control === */
.mute-control {
  position: relative;
}

.sound-hint {
  position: absolute;
  bottom: -2.5rem;
  right: 0;
  display: flex;
  align-items: center;
  color: var(--white-80);
}

.sound-hint-label {
  white-space: nowrap;
  font-weight: 500;
  font-size: 0.875rem;
  margin-right: 0.5rem;
}

.sound-hint-arrow {
  font-size: 1.125rem;
}

/* === Buttons === */
.btn-glass {
  display: inline-flex;
  align-items: center;
  justify-content: center;
  padding: 0.75rem;
  border-radius: 9999px;
  color: var(--white);
  background: var(--white-10);
  border: 1px solid var(--white-20);
  backdrop-filter: blur(12px);
  -webkit-backdrop-filter: blur(12px);
  cursor: pointer;
  transition: background var(--gentle);
}

.btn-glass:hover {
  background: var(--white-20);
}

.btn-glass:active {
  background: rgba(255, 255, 255, 0.3);
}

.btn-cta {
  background: var(--red);
  color: var(--white);
  font-weight: 600;
  padding: 0.75rem 1.5rem;
  border-radius: 0.375rem;
  cursor: pointer;
  transition: background var(--gentle), transform var(--gentle);
}

.btn-cta:hover {
  background: var(--red-hover);
  transform: scale(1.05);
}

.btn-cta:active {
  background: var(--red-active);
  transform: scale(0.95);
}

.cta-desktop {
  display: none;
  margin-left: 1rem;
}

.hamburger {
  position: relative;
  z-index: 120;
}

/* === Mobile Menu === */
.mobile-backdrop {
  position: fixed;
  inset: 0;
  z-index: 80;
  background: rgba(0, 0, 0, 0.5);
  backdrop-filter: blur(12px);
  -webkit-backdrop-filter: blur(12px);
  cursor: pointer;
  animation: fade-in 0.3s ease both;
}

.mobile-panel {
  position: fixed;
  top: 0;
  right: 0;
  height: 100%;
  width: 18rem;
  max-width: 85vw;
  z-index: 90;
  background: rgba(0, 0, 0, 0.9);
  backdrop-filter: blur(24px);
  -webkit-backdrop-filter: blur(24px);
  border-left: 1px solid var(--white-10);
  transform: translateX(100%);
  transition: transform 0.5s cubic-bezier(0.22, 1.2, 0.36, 1);
  pointer-events: auto;
}

.mobile-panel.open {
  transform: translateX(0%);
}

.mobile-panel-inner {
  display: flex;
  flex-direction: column;
  height: 100%;
}

.mobile-panel-header {
  display: flex;
  justify-content: flex-end;
  padding: 1rem;
}

.mobile-panel-body {
  display: flex;
  flex-direction: column;
  height: 100%;
  padding: 0 1.5rem 1.5rem;
}

.mobile-links {
  display: flex;
  flex-direction: column;
  gap: 1rem;
}

.mobile-link {
  padding: 0.75rem 1rem;
  border-radius: 0.5rem;
  font-weight: 500;
  font-size: 1.125rem;
  transition: background var(--gentle), color var(--gentle);
}

.mobile-link:hover {
  color: var(--white-80);
  background: var(--white-10);
}

.mobile-link:active {
  background: var(--white-20);
}

.cta-mobile {
  margin-top: 2rem;
  border-radius: 0.5rem;
}

/* === Contact === */
.contact-section {
  min-height: 60vh;
  padding: 6rem 1.5rem;
  display: flex;
  flex-direction: column;
  justify-content: center;
  gap: 1rem;
}

.contact-title {
  font-size: 2.25rem;
  font-weight: 900;
}

.contact-body {
  color: var(--white-80);
  font-size: 1.125rem;
}

/* === Animations === */
@keyframes drop-in {
  from { opacity: 0; transform: translateY(-30px); }
  to { opacity: 1; transform: translateY(0); }
}

@keyframes slide-in-left {
  from { opacity: 0; transform: translateX(-50px); }
  to { opacity: 1; transform: translateX(0); }
}

@keyframes fade-in {
  from { opacity: 0; }
  to { opacity: 1; }
}

@media (prefers-reduced-motion: reduce) {
  .navbar, .hero-title-wrap, .mobile-backdrop {
    animation: none;
  }
  .mobile-panel {
    transition: none;
  }
}

/* === Responsive === */
@media (min-width: 640px) {
  .navbar-inner { padding: 1rem 2rem; }
  .hero-title-wrap { left: 2rem; }
  .hero-title { font-size: 2.25rem; }
  .cta-desktop { display: block; }
  .contact-section { padding: 6rem 2rem; }
}

@media (min-width: 768px) {
  .nav-links { display: flex; }
  .hamburger, .mobile-backdrop, .mobile-panel { display: none; }
}

@media (min-width: 1024px) {
  .navbar-inner { padding: 1rem 3rem; }
  .hero-title-wrap { left: 3rem; }
  .hero-title { font-size: 3rem; }
  .contact-section { padding: 6rem 3rem; }
}

@media (min-width: 1280px) {
  .hero-title { font-size: 3.75rem; }
}
"#;
