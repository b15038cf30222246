//! Global CSS styles for QuoteVerse.
//!
//! Glassmorphism over animated mood gradients.

pub const GLOBAL_STYLES: &str = r#"
/* === CSS Custom Properties === */
:root {
  /* Accents */
  --pink: #ec4899;
  --pink-bright: #ff2e63;
  --purple: #a855f7;
  --blue: #60a5fa;

  /* Glass surfaces */
  --glass-bg: rgba(255, 255, 255, 0.1);
  --glass-bg-hover: rgba(255, 255, 255, 0.2);
  --glass-border: rgba(255, 255, 255, 0.1);

  /* Text */
  --text-primary: #ffffff;
  --text-secondary: rgba(255, 255, 255, 0.7);
  --text-muted: rgba(255, 255, 255, 0.5);

  /* Typography */
  --font-sans: 'Inter', 'Segoe UI', Helvetica, Arial, sans-serif;
  --font-serif: Georgia, 'Times New Roman', serif;

  /* Transitions */
  --transition-fast: 150ms ease;
  --transition-normal: 300ms ease;
  --transition-slow: 700ms ease;
}

/* === Global Reset === */
*, *::before, *::after {
  box-sizing: border-box;
  margin: 0;
  padding: 0;
}

html {
  font-size: 16px;
  -webkit-font-smoothing: antialiased;
}

body {
  font-family: var(--font-sans);
  background: #0d0d0d;
  color: var(--text-primary);
  line-height: 1.6;
  min-height: 100vh;
  overflow-x: hidden;
}

/* === Mood Background === */
.mood-background {
  position: fixed;
  inset: 0;
  z-index: -10;
  background-size: 400% 400%;
  background-position: center;
  animation: gradient-drift 20s ease-in-out infinite;
  transition: background-image var(--transition-slow);
}

@keyframes gradient-drift {
  0% { background-position: 0% 50%; }
  50% { background-position: 100% 50%; }
  100% { background-position: 0% 50%; }
}

.mood-orb {
  position: absolute;
  border-radius: 50%;
  filter: blur(64px);
  mix-blend-mode: overlay;
  animation: orb-float 14s ease-in-out infinite;
}

@keyframes orb-float {
  0%, 100% { transform: translate(0, 0); }
  25% { transform: translate(30px, 40px); }
  75% { transform: translate(-30px, -20px); }
}

/* === Nav Header === */
.nav-header {
  position: fixed;
  top: 0;
  width: 100%;
  z-index: 50;
  display: flex;
  justify-content: center;
  padding: 1rem 1.5rem;
}

.nav-bar {
  width: 100%;
  max-width: 72rem;
  display: flex;
  justify-content: space-between;
  align-items: center;
  gap: 2rem;
  padding: 0.75rem 1.5rem;
  border-radius: 9999px;
  border: 1px solid rgba(168, 85, 247, 0.3);
  backdrop-filter: blur(12px);
  box-shadow: 0 8px 32px rgba(0, 0, 0, 0.3);
  background-size: 300% 300%;
  animation: gradient-drift 20s ease-in-out infinite;
  transition: background-image var(--transition-slow);
}

.nav-logo {
  display: flex;
  align-items: center;
  font-weight: 800;
  font-size: 1.4rem;
}

.nav-logo-badge {
  width: 2.4rem;
  height: 2.4rem;
  margin-right: 0.5rem;
  display: flex;
  align-items: center;
  justify-content: center;
  border-radius: 50%;
  background: linear-gradient(135deg, var(--pink), var(--purple));
  box-shadow: 0 0 18px rgba(236, 72, 153, 0.4);
}

.nav-logo-name {
  background: linear-gradient(90deg, var(--pink), var(--purple));
  -webkit-background-clip: text;
  background-clip: text;
  color: transparent;
}

.nav-links {
  display: flex;
  gap: 1.8rem;
  list-style: none;
  font-size: 1.05rem;
}

.nav-link {
  color: var(--text-primary);
  text-decoration: none;
  padding: 0.25rem 0.5rem;
  border-bottom: 2px solid transparent;
  transition: all var(--transition-normal);
}

.nav-link:hover {
  color: #f9a8d4;
}

.nav-link.active {
  border-bottom-color: var(--pink);
}

.theme-toggle {
  background: var(--purple);
  color: var(--text-primary);
  border: none;
  padding: 0.5rem 0.75rem;
  border-radius: 50%;
  cursor: pointer;
  font-size: 1rem;
  box-shadow: 0 2px 10px rgba(0, 0, 0, 0.3);
  transition: background var(--transition-fast);
}

.theme-toggle:hover {
  background: #c084fc;
}

/* === Page Layout === */
.page {
  position: relative;
  min-height: 100vh;
  padding: 7rem 1.5rem 4rem;
}

.page-heading {
  text-align: center;
  margin-bottom: 3rem;
}

.page-title {
  font-size: 3rem;
  font-weight: 600;
  margin-bottom: 0.75rem;
  background: linear-gradient(90deg, var(--purple), var(--pink), var(--blue));
  -webkit-background-clip: text;
  background-clip: text;
  color: transparent;
  filter: drop-shadow(0 2px 8px rgba(0, 0, 0, 0.4));
}

.page-subtitle {
  font-size: 1.15rem;
  color: var(--text-secondary);
  max-width: 28rem;
  margin: 0 auto;
}

/* === Hero === */
.hero {
  min-height: 100vh;
  display: flex;
  flex-direction: column;
  align-items: center;
  justify-content: center;
}

.hero-card {
  position: relative;
  width: 500px;
  max-width: 90vw;
  min-height: 220px;
  padding: 2rem;
  display: flex;
  flex-direction: column;
  justify-content: center;
  align-items: center;
  text-align: center;
  cursor: pointer;
  border-radius: 1rem;
  backdrop-filter: blur(20px) saturate(180%);
  background: rgba(255, 255, 255, 0.15);
  border: 1px solid rgba(255, 255, 255, 0.2);
  box-shadow: 0 20px 60px rgba(0, 0, 0, 0.4);
  transition: transform 600ms;
}

.hero-card.flipping {
  transform: rotateY(180deg);
}

.hero-quote {
  font-size: 1.3rem;
  font-weight: 500;
  line-height: 1.6;
}

.hero-author {
  margin-top: 1rem;
  font-size: 0.9rem;
  color: var(--text-secondary);
}

.mood-tag {
  position: absolute;
  top: 1rem;
  left: 1rem;
  font-size: 0.75rem;
  font-weight: 600;
  padding: 0.25rem 0.75rem;
  border-radius: 9999px;
  background: var(--glass-bg-hover);
  box-shadow: 0 1px 6px rgba(0, 0, 0, 0.3);
}

.shuffle-button {
  position: fixed;
  bottom: 2.5rem;
  right: 2.5rem;
  width: 4rem;
  height: 4rem;
  display: flex;
  align-items: center;
  justify-content: center;
  border-radius: 50%;
  border: none;
  cursor: pointer;
  font-size: 1.6rem;
  color: var(--text-primary);
  background: var(--pink);
  box-shadow: 0 8px 24px rgba(236, 72, 153, 0.5);
  z-index: 20;
  transition: transform var(--transition-fast), box-shadow var(--transition-fast);
}

.shuffle-button:hover {
  transform: scale(1.15);
  box-shadow: 0 0 25px var(--pink-bright);
}

/* === Search + Filters === */
.filter-row {
  display: flex;
  flex-wrap: wrap;
  justify-content: center;
  align-items: center;
  gap: 1.5rem;
  margin-bottom: 3rem;
}

.search-input {
  padding: 0.5rem 1rem;
  border-radius: 0.5rem;
  border: none;
  outline: none;
  background: var(--glass-bg);
  color: var(--text-primary);
  font-size: 1rem;
  min-width: 16rem;
}

.search-input::placeholder {
  color: var(--text-muted);
}

.search-input:focus {
  box-shadow: 0 0 0 2px var(--pink);
}

.filter-chips {
  display: flex;
  flex-wrap: wrap;
  justify-content: center;
  gap: 0.75rem;
}

.filter-chip {
  display: flex;
  align-items: center;
  gap: 0.5rem;
  padding: 0.5rem 1.25rem;
  border-radius: 9999px;
  border: none;
  cursor: pointer;
  font-size: 0.9rem;
  font-weight: 600;
  color: var(--text-primary);
  background: var(--glass-bg);
  transition: all var(--transition-normal);
}

.filter-chip:hover {
  background: var(--glass-bg-hover);
}

.filter-chip.active {
  background: var(--glass-bg-hover);
  transform: scale(1.05);
  box-shadow: 0 4px 16px rgba(0, 0, 0, 0.3);
}

.chip-count {
  font-size: 0.75rem;
  opacity: 0.8;
}

/* === Quote Grid === */
.quote-grid {
  display: grid;
  grid-template-columns: repeat(auto-fill, minmax(18rem, 1fr));
  gap: 1.5rem;
  max-width: 72rem;
  margin: 0 auto;
}

.quote-card {
  position: relative;
  padding: 1.5rem;
  border-radius: 1rem;
  background: var(--glass-bg);
  backdrop-filter: blur(12px);
  border: 1px solid var(--glass-border);
  box-shadow: 0 12px 32px rgba(0, 0, 0, 0.3);
}

.quote-card-header {
  display: flex;
  justify-content: space-between;
  align-items: center;
  margin-bottom: 1rem;
}

.category-badge {
  padding: 0.25rem 0.75rem;
  font-size: 0.75rem;
  font-weight: 600;
  border-radius: 9999px;
  background: var(--glass-bg-hover);
}

.favorite-button {
  background: none;
  border: none;
  cursor: pointer;
  font-size: 1.1rem;
  color: var(--text-secondary);
  transition: color var(--transition-fast);
}

.favorite-button:hover {
  color: #f9a8d4;
}

.favorite-button.favorited {
  color: var(--pink);
}

.quote-text {
  font-style: italic;
  font-size: 1.1rem;
  line-height: 1.6;
  margin-bottom: 0.75rem;
}

.quote-author {
  font-size: 0.85rem;
  color: var(--text-secondary);
}

/* === Random Bubbles === */
.bubble-grid {
  display: grid;
  grid-template-columns: repeat(auto-fill, minmax(13rem, 1fr));
  gap: 1.5rem;
  max-width: 72rem;
  margin: 0 auto;
}

.quote-bubble {
  padding: 1.5rem;
  border-radius: 50%;
  aspect-ratio: 1;
  display: flex;
  flex-direction: column;
  align-items: center;
  justify-content: center;
  text-align: center;
  cursor: pointer;
  background: var(--glass-bg-hover);
  backdrop-filter: blur(12px);
  box-shadow: 0 12px 32px rgba(0, 0, 0, 0.3);
  animation: orb-float 7s ease-in-out infinite;
  transition: transform var(--transition-normal);
}

.quote-bubble:hover {
  transform: scale(1.1);
}

.bubble-text {
  font-size: 0.85rem;
  font-weight: 600;
  display: -webkit-box;
  -webkit-line-clamp: 3;
  -webkit-box-orient: vertical;
  overflow: hidden;
}

.bubble-author {
  margin-top: 0.5rem;
  font-size: 0.7rem;
  color: var(--text-secondary);
}

/* === Modal === */
.modal-overlay {
  position: fixed;
  inset: 0;
  z-index: 50;
  display: flex;
  align-items: center;
  justify-content: center;
  background: rgba(0, 0, 0, 0.7);
}

.modal-card {
  position: relative;
  max-width: 32rem;
  padding: 2rem;
  text-align: center;
  border-radius: 1rem;
  background: var(--glass-bg);
  backdrop-filter: blur(16px);
  box-shadow: 0 24px 64px rgba(0, 0, 0, 0.5);
}

.modal-quote {
  font-size: 1.25rem;
  font-style: italic;
  margin-bottom: 1rem;
}

.modal-author {
  color: var(--text-secondary);
}

.modal-close {
  margin-top: 1.5rem;
  padding: 0.5rem 1.25rem;
  border: none;
  border-radius: 0.5rem;
  cursor: pointer;
  font-weight: 600;
  color: var(--text-primary);
  background: var(--pink);
  transition: background var(--transition-fast);
}

.modal-close:hover {
  background: #db2777;
}

/* === States === */
.status-message {
  text-align: center;
  font-size: 1.1rem;
  color: var(--text-secondary);
  padding: 2rem 0;
}

/* === Footer === */
.footer {
  position: relative;
  z-index: 10;
  padding: 1.5rem;
  text-align: center;
  background: rgba(0, 0, 0, 0.4);
  backdrop-filter: blur(12px);
  border-top: 1px solid var(--glass-border);
}

.footer-text {
  font-size: 0.85rem;
  color: var(--text-secondary);
}
"#;
