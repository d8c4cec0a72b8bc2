use axum::response::Html;

/// Single page with both forms. Field bounds mirror `fitness::dto`.
pub async fn index() -> Html<&'static str> {
    Html(INDEX_HTML)
}

const INDEX_HTML: &str = r#"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="UTF-8">
<meta name="viewport" content="width=device-width, initial-scale=1.0">
<title>Quantum Fit</title>
<style>
 body { font-family: sans-serif; max-width: 760px; margin: 2rem auto; padding: 0 1rem; }
 fieldset { margin-bottom: 1.5rem; }
 label { display: block; margin: .4rem 0; }
 .error { color: #b00020; }
 .tab { border-top: 1px solid #ddd; padding: .5rem 0; white-space: pre-wrap; }
 pre { white-space: pre-wrap; }
</style>
</head>
<body>
<h1>Quantum Fit</h1>
<p>Your AI-powered personalized fitness planner.</p>

<form id="plan">
 <fieldset><legend>Fitness plan</legend>
  <label>Height (cm) <input name="height" type="number" min="50" max="300" step="1" required></label>
  <label>Weight (kg) <input name="weight" type="number" min="10" max="300" step="1" required></label>
  <label>Age (years) <input name="age" type="number" min="5" max="100" step="1" required></label>
  <label>Gender <select name="gender"><option>Male</option><option>Female</option></select></label>
  <label>Goal <select name="goal"><option>Cutting</option><option>Bulking</option><option>Recomp</option></select></label>
  <label>Preferences, allergies, injuries or dietary notes<br><textarea name="notes" rows="3" cols="60"></textarea></label>
  <button type="submit">Generate My Plan</button>
  <button type="button" id="pdf">Download PDF</button>
 </fieldset>
</form>
<div id="plan-out"></div>

<form id="meal">
 <fieldset><legend>Food calorie meter</legend>
  <label>Input prompt <input name="prompt" type="text" size="50"></label>
  <label>Photo <input name="image" type="file" accept=".jpg,.jpeg,.png,image/jpeg,image/png"></label>
  <button type="submit">Tell me the Total Calories</button>
 </fieldset>
</form>
<div id="meal-out"></div>

<script>
const api = '/api/v1';
function planBody() {
  const f = new FormData(document.getElementById('plan'));
  const num = k => f.get(k) === '' ? null : Number(f.get(k));
  return JSON.stringify({ height: num('height'), weight: num('weight'), age: num('age'),
    gender: f.get('gender'), goal: f.get('goal'), notes: f.get('notes') });
}
function showError(el, msg) { el.innerHTML = ''; const p = document.createElement('p'); p.className = 'error'; p.textContent = msg; el.appendChild(p); }
async function errorOf(res) { try { return (await res.json()).error; } catch (_) { return res.statusText; } }

document.getElementById('plan').addEventListener('submit', async ev => {
  ev.preventDefault();
  const out = document.getElementById('plan-out');
  out.textContent = 'Generating your personalized plan...';
  const res = await fetch(api + '/fitness/plan', { method: 'POST', headers: { 'Content-Type': 'application/json' }, body: planBody() });
  if (!res.ok) return showError(out, await errorOf(res));
  const plan = await res.json();
  out.innerHTML = '';
  const r = plan.rendered;
  if (r.kind === 'sectioned') {
    for (const s of r.sections) {
      const d = document.createElement('div'); d.className = 'tab';
      const h = document.createElement('h3'); h.textContent = s.title; d.appendChild(h);
      d.appendChild(document.createTextNode(s.body)); out.appendChild(d);
    }
  } else {
    const n = document.createElement('p'); n.textContent = r.notice; out.appendChild(n);
    const pre = document.createElement('pre'); pre.textContent = r.text; out.appendChild(pre);
  }
});

document.getElementById('pdf').addEventListener('click', async () => {
  const out = document.getElementById('plan-out');
  const res = await fetch(api + '/fitness/plan/pdf', { method: 'POST', headers: { 'Content-Type': 'application/json' }, body: planBody() });
  if (!res.ok) return showError(out, await errorOf(res));
  const url = URL.createObjectURL(await res.blob());
  const a = document.createElement('a'); a.href = url; a.download = 'fitness_plan.pdf'; a.click();
  URL.revokeObjectURL(url);
});

document.getElementById('meal').addEventListener('submit', async ev => {
  ev.preventDefault();
  const out = document.getElementById('meal-out');
  out.textContent = 'Analysing...';
  const res = await fetch(api + '/meals/calories', { method: 'POST', body: new FormData(ev.target) });
  if (!res.ok) return showError(out, await errorOf(res));
  const body = await res.json();
  out.innerHTML = '<h3>The Response is</h3>';
  const pre = document.createElement('pre'); pre.textContent = body.text; out.appendChild(pre);
});
</script>
</body>
</html>
"#;
