use crate::models::StateResponse;

pub fn render_index(snapshot: &StateResponse) -> String {
    INDEX_HTML
        .replace("{{THEME}}", snapshot.theme.as_str())
        .replace("{{TOGGLE_ICON}}", toggle_icon(snapshot.theme.as_str()))
        .replace("{{MESSAGE}}", &escape_html(&snapshot.message))
        .replace("{{GOAL}}", &snapshot.goal.to_string())
        .replace("{{COUNT}}", &snapshot.count.to_string())
        .replace("{{PROGRESS}}", &format!("{:.2}", snapshot.progress))
        .replace("{{TIER}}", snapshot.tier.as_str())
        .replace("{{PENDING}}", &escape_html(&snapshot.pending_goal_input))
}

fn toggle_icon(theme: &str) -> &'static str {
    if theme == "light" { "🌙" } else { "🌞" }
}

fn escape_html(value: &str) -> String {
    let mut escaped = String::with_capacity(value.len());
    for ch in value.chars() {
        match ch {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(ch),
        }
    }
    escaped
}

const INDEX_HTML: &str = r#"<!DOCTYPE html>
<html lang="en">
<head>
  <meta charset="UTF-8" />
  <meta name="viewport" content="width=device-width, initial-scale=1.0" />
  <title>Fitness Click Tracker</title>
  <style>
    body {
      margin: 0;
      min-height: 100vh;
      font-family: "Poppins", Arial, sans-serif;
      text-align: center;
      padding: 40px 18px;
      box-sizing: border-box;
      transition: all 0.5s ease;
    }

    body[data-theme="light"] {
      --background: linear-gradient(135deg, #74abe2, #5563de);
      --card: white;
      --text: black;
      --button: #4caf50;
    }

    body[data-theme="dark"] {
      --background: linear-gradient(135deg, #1e1e1e, #121212);
      --card: #2c2c2c;
      --text: white;
      --button: #00c853;
    }

    body {
      background: var(--background);
      color: var(--text);
    }

    .topbar {
      display: flex;
      justify-content: flex-end;
    }

    .theme-toggle {
      background: none;
      border: none;
      font-size: 28px;
      cursor: pointer;
      color: var(--text);
    }

    h1 {
      font-size: 36px;
      margin-bottom: 10px;
    }

    .message {
      font-size: 20px;
      margin-bottom: 20px;
    }

    .card {
      background: var(--card);
      color: var(--text);
      border-radius: 10px;
      padding: 20px;
      width: 90%;
      max-width: 400px;
      margin: 0 auto;
      box-shadow: 0 4px 10px rgba(0, 0, 0, 0.2);
    }

    .bar {
      height: 20px;
      background: #555;
      border-radius: 10px;
      overflow: hidden;
      margin-bottom: 20px;
    }

    .fill {
      height: 100%;
      transition: width 0.3s ease;
    }

    .fill[data-tier="low"] { background: #2196f3; }
    .fill[data-tier="mid"] { background: #ffc107; }
    .fill[data-tier="done"] { background: #4caf50; }

    form {
      display: inline;
    }

    .btn {
      margin: 5px;
      padding: 10px 20px;
      font-size: 16px;
      color: white;
      border: none;
      border-radius: 8px;
      cursor: pointer;
    }

    .btn-add { background: var(--button); }
    .btn-reset { background: #f44336; }
    .btn-goal { background: #2196f3; padding: 8px 16px; }

    .goal-row {
      margin-top: 20px;
    }

    .goal-row input {
      padding: 8px;
      font-size: 16px;
      border-radius: 6px;
      border: 1px solid #ccc;
      margin-right: 10px;
      width: 60%;
    }
  </style>
</head>
<body data-theme="{{THEME}}">
  <div class="topbar">
    <form method="post" action="/theme/toggle" id="theme-form">
      <button class="theme-toggle" type="submit" title="Toggle theme" id="theme-toggle">{{TOGGLE_ICON}}</button>
    </form>
  </div>

  <h1>🏋️ Fitness Click Tracker</h1>
  <p class="message" id="message">{{MESSAGE}}</p>

  <main class="card">
    <h2>Goal: <span id="goal">{{GOAL}}</span> reps</h2>
    <h2>Reps Completed: <span id="count">{{COUNT}}</span></h2>

    <div class="bar">
      <div class="fill" id="fill" data-tier="{{TIER}}" style="width: {{PROGRESS}}%"></div>
    </div>

    <div>
      <form method="post" action="/rep/add" id="add-form">
        <button class="btn btn-add" type="submit">Add Rep 💪</button>
      </form>
      <form method="post" action="/rep/reset" id="reset-form">
        <button class="btn btn-reset" type="submit">Reset 🔁</button>
      </form>
    </div>

    <div class="goal-row">
      <input type="number" placeholder="Enter new goal" id="goal-input" value="{{PENDING}}" />
      <button class="btn btn-goal" type="button" id="goal-button">Set Goal 🎯</button>
    </div>
  </main>

  <script>
    const messageEl = document.getElementById('message');
    const goalEl = document.getElementById('goal');
    const countEl = document.getElementById('count');
    const fillEl = document.getElementById('fill');
    const toggleEl = document.getElementById('theme-toggle');
    const goalInput = document.getElementById('goal-input');

    const tones = {
      click: { frequency: 880, duration: 0.06 },
      goal: { frequency: 523.25, duration: 0.6 }
    };
    const playing = {};
    let audio = null;

    const play = (clip) => {
      const tone = tones[clip];
      if (!tone) {
        return;
      }
      try {
        audio = audio || new (window.AudioContext || window.webkitAudioContext)();
        if (playing[clip]) {
          playing[clip].stop();
        }
        const osc = audio.createOscillator();
        const gain = audio.createGain();
        osc.frequency.value = tone.frequency;
        gain.gain.setValueAtTime(0.2, audio.currentTime);
        gain.gain.exponentialRampToValueAtTime(0.001, audio.currentTime + tone.duration);
        osc.connect(gain).connect(audio.destination);
        osc.start();
        osc.stop(audio.currentTime + tone.duration);
        playing[clip] = osc;
      } catch (err) {
        console.warn('sound unavailable', err);
      }
    };

    const render = (data) => {
      document.body.dataset.theme = data.theme;
      toggleEl.textContent = data.theme === 'light' ? '🌙' : '🌞';
      messageEl.textContent = data.message;
      goalEl.textContent = data.goal;
      countEl.textContent = data.count;
      fillEl.style.width = `${data.progress}%`;
      fillEl.dataset.tier = data.tier;
      if (document.activeElement !== goalInput || data.pending_goal_input === '') {
        goalInput.value = data.pending_goal_input;
      }
      data.sounds.forEach(play);
    };

    const send = async (action, value) => {
      const body = value === undefined ? { action } : { action, value };
      const res = await fetch('/api/action', {
        method: 'POST',
        headers: { 'content-type': 'application/json' },
        body: JSON.stringify(body)
      });
      if (!res.ok) {
        throw new Error((await res.text()) || 'Request failed');
      }
      render(await res.json());
    };

    let queue = Promise.resolve();
    const enqueue = (action, value) => {
      queue = queue
        .then(() => send(action, value))
        .catch((err) => console.error(err));
    };

    const bind = (formId, action) => {
      document.getElementById(formId).addEventListener('submit', (event) => {
        event.preventDefault();
        enqueue(action);
      });
    };

    bind('add-form', 'increase');
    bind('reset-form', 'reset');
    bind('theme-form', 'toggle_theme');

    goalInput.addEventListener('input', () => {
      enqueue('goal_input', goalInput.value);
    });

    document.getElementById('goal-button').addEventListener('click', () => {
      enqueue('update_goal', goalInput.value);
    });
  </script>
</body>
</html>
"#;
