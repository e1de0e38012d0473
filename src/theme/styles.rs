//! Global CSS styles for the Arcana widget.
//!
//! Everything positional lives in the per-card inline style computed
//! by arcana_core::CardLayout; this sheet carries the static look of
//! the table, the 3-D flip surfaces, and the result panel.

pub const GLOBAL_STYLES: &str = r#"
*, *::before, *::after {
  box-sizing: border-box;
  margin: 0;
  padding: 0;
}

.tarot-card-picker {
  padding: 2rem;
  background: linear-gradient(to bottom right, #f0e6ff, #e6e6ff);
  min-height: 100vh;
  font-family: Arial, sans-serif;
}

.title {
  font-size: 2rem;
  font-weight: bold;
  margin-bottom: 2rem;
  text-align: center;
  color: #4b0082;
}

/* === Deck === */
.card-container {
  position: relative;
  height: 400px;
  width: 100%;
  overflow: hidden;
}

.card-deck {
  position: absolute;
  left: 50%;
  transform: translateX(-50%);
  width: 440px;
  top: 40px;
}

.tarot-card {
  position: absolute;
  cursor: pointer;
  transition: all 0.5s ease-in-out;
  border-radius: 8px;
  box-shadow: 0 2px 4px rgba(0, 0, 0, 0.1);
}

.tarot-card.hoverable:hover {
  box-shadow: 0 4px 8px rgba(75, 0, 130, 0.3);
}

/* === Flip surface === */
.card-inner {
  width: 100%;
  height: 100%;
  position: relative;
  transition: transform 0.5s;
  transform-style: preserve-3d;
}

.card-inner.revealed {
  transform: rotateY(180deg);
}

.card-back, .card-front {
  width: 100%;
  height: 100%;
  object-fit: cover;
  position: absolute;
  backface-visibility: hidden;
  border-radius: 8px;
}

.card-front {
  transform: rotateY(180deg);
}

/* === Result === */
.result {
  text-align: center;
  margin-top: 2rem;
  animation: fadeIn 0.5s;
}

.result-text {
  font-size: 1.25rem;
  font-weight: 600;
  color: #4b0082;
}

.reset-button {
  margin-top: 1rem;
  padding: 0.5rem 1rem;
  background-color: #4b0082;
  color: white;
  border: none;
  border-radius: 9999px;
  cursor: pointer;
  transition: background-color 0.3s;
}

.reset-button:hover {
  background-color: #3a006f;
}

@keyframes fadeIn {
  from { opacity: 0; }
  to { opacity: 1; }
}
"#;
