//! 단일 페이지 템플릿
//!
//! 페이지 전체(HTML/CSS/JS)를 바이너리에 문자열 상수로 내장합니다. 외부 에셋,
//! 빌드 도구, CDN 의존성이 없습니다. 내장 스크립트의 상태 전이 규칙은
//! `shell::ShellState`와 동일합니다.

use super::shell::{ShellState, EXAMPLES, ROTATION_INTERVAL_MS};
use crate::error::GENERATION_ERROR_MESSAGE;

/// 인덱스 페이지 렌더링
///
/// 데모 문구 목록과 초기 필드 값은 셸 상태 머신에서 주입합니다.
pub fn render_index() -> String {
    let initial = ShellState::new();
    let examples_json =
        serde_json::to_string(&EXAMPLES).expect("static example list serializes");

    PAGE_TEMPLATE
        .replace("__EXAMPLES_JSON__", &examples_json)
        .replace("__INITIAL_FIELD__", initial.field())
        .replace("__EXAMPLE_HINT__", EXAMPLES[2])
        .replace("__ERROR_MESSAGE__", GENERATION_ERROR_MESSAGE)
        .replace("__ROTATION_INTERVAL__", &ROTATION_INTERVAL_MS.to_string())
}

const PAGE_TEMPLATE: &str = r##"<!DOCTYPE html>
<html lang="ko">
<head>
<meta charset="utf-8">
<meta name="viewport" content="width=device-width, initial-scale=1">
<title>비즈니스 기회 발견 매트릭스</title>
<style>
:root {
  --bg: #f8fafc;
  --surface: #ffffff;
  --border: #e2e8f0;
  --text: #0f172a;
  --text-muted: #64748b;
  --text-faint: #94a3b8;
  --accent: #2563eb;
  --danger: #f43f5e;
}
* { margin: 0; padding: 0; box-sizing: border-box; }
body {
  background: var(--bg);
  color: var(--text);
  font-family: -apple-system, BlinkMacSystemFont, 'Segoe UI', 'Apple SD Gothic Neo', sans-serif;
  font-size: 15px;
  line-height: 1.6;
}
.app { max-width: 960px; margin: 0 auto; padding: 64px 24px 96px; }
.page-header .doc-label {
  font-size: 10px; font-weight: 700; letter-spacing: 0.4em;
  text-transform: uppercase; color: var(--text-faint); margin-bottom: 14px;
}
.page-header h1 { font-size: 32px; font-weight: 500; letter-spacing: -0.02em; margin-bottom: 12px; }
.page-header .subtitle { color: var(--text-muted); font-size: 16px; max-width: 560px; margin-bottom: 40px; }
form .input-row {
  display: flex; align-items: center; background: var(--surface);
  border: 1px solid var(--border); border-radius: 8px;
  box-shadow: 0 1px 2px rgba(15, 23, 42, 0.04);
}
form .input-row:focus-within { border-color: var(--accent); }
#clear-btn {
  width: 44px; border: none; background: none; color: var(--text-faint);
  font-size: 16px; cursor: pointer; visibility: hidden;
}
#clear-btn:hover { color: var(--danger); }
#field {
  flex: 1; padding: 18px 4px; font-size: 17px; font-weight: 500;
  border: none; outline: none; background: transparent; color: var(--text);
}
#submit-btn {
  margin-right: 8px; padding: 11px 28px; border: none; border-radius: 6px;
  background: var(--accent); color: #fff; font-size: 13px; font-weight: 600; cursor: pointer;
}
#submit-btn:disabled { background: var(--border); color: var(--text-faint); cursor: default; }
.example-hint { margin-top: 12px; font-size: 11px; color: var(--text-faint); font-weight: 500; }
#error-banner {
  display: none; margin: 40px 0 0; padding: 20px 24px; font-size: 13px;
  background: var(--surface); border: 1px solid var(--border); border-radius: 8px;
  color: var(--text-muted);
}
#loading {
  display: none; margin-top: 72px; text-align: center;
  color: var(--text-faint); font-size: 13px; letter-spacing: 0.04em;
}
.spinner {
  display: inline-block; width: 30px; height: 30px; margin-bottom: 18px;
  border: 2px solid var(--border); border-top-color: var(--accent);
  border-radius: 50%; animation: spin 0.8s linear infinite;
}
@keyframes spin { to { transform: rotate(360deg); } }
#result { margin-top: 56px; }
.report-meta h3 { font-size: 21px; font-weight: 600; letter-spacing: -0.01em; }
.report-meta p { margin: 8px 0 28px; font-size: 13px; color: var(--text-muted); }
table.matrix {
  width: 100%; border-collapse: collapse; background: var(--surface);
  border: 1px solid var(--border); border-radius: 8px; overflow: hidden;
}
table.matrix th {
  padding: 20px 18px; text-align: left; font-size: 10px; font-weight: 700;
  letter-spacing: 0.12em; text-transform: uppercase; color: var(--text-muted);
  border-bottom: 1px solid var(--border);
}
table.matrix td { padding: 20px 18px; vertical-align: top; border-bottom: 1px solid var(--border); }
table.matrix tr:last-child td { border-bottom: none; }
td.strategy span { display: block; font-size: 12px; font-weight: 700; }
td.strategy small { font-size: 10px; color: var(--text-faint); text-transform: uppercase; }
td.idea h4 { font-size: 13px; font-weight: 700; margin-bottom: 6px; }
td.idea p { font-size: 12px; color: var(--text-muted); }
.appendix { margin-top: 64px; }
.appendix h2 {
  font-size: 11px; font-weight: 700; letter-spacing: 0.4em;
  text-transform: uppercase; color: var(--text-faint); text-align: center; margin-bottom: 36px;
}
section.logic { margin-bottom: 32px; }
section.logic h3 { font-size: 13px; font-weight: 700; margin-bottom: 14px; }
.logic-label {
  font-size: 10px; font-weight: 700; text-transform: uppercase;
  color: var(--text-faint); margin-top: 12px;
}
.logic-value { font-size: 13px; color: var(--text); }
#export-bar { display: none; margin-top: 56px; padding-top: 40px; border-top: 1px solid var(--border); text-align: center; }
#export-bar button {
  margin: 0 6px; padding: 12px 24px; border-radius: 6px; font-size: 12px;
  font-weight: 600; cursor: pointer;
}
#print-btn { border: none; background: var(--text); color: #fff; }
#txt-btn { border: 1px solid var(--border); background: none; color: var(--text-muted); }
.export-note { margin-top: 14px; font-size: 11px; color: var(--text-faint); font-style: italic; }
.print-header, .print-footer { display: none; }

@media print {
  .page-header, form, .example-hint, #error-banner, #loading, #export-bar { display: none !important; }
  body { background: #fff; }
  .app { padding: 0; max-width: none; }
  .print-header { display: block; border-bottom: 2px solid var(--text); padding-bottom: 20px; margin-bottom: 32px; }
  .print-header .doc-label {
    font-size: 10px; font-weight: 700; letter-spacing: 0.5em;
    text-transform: uppercase; color: var(--text-faint); margin-bottom: 8px;
  }
  .print-header h1 { font-size: 26px; font-weight: 700; }
  .print-footer { display: block; margin-top: 48px; text-align: center; font-size: 10px; color: var(--text-faint); font-style: italic; }
  table.matrix tr, section.logic { break-inside: avoid; }
}
</style>
</head>
<body>
<div class="app">
  <header class="page-header">
    <p class="doc-label">Strategic Analysis Tool</p>
    <h1>비즈니스 기회 발견 매트릭스</h1>
    <p class="subtitle">타겟, 도메인, 모델을 조합하여 혁신 전략을 도출합니다.<br>전문적인 분석 리포트를 확인하세요.</p>
  </header>

  <form id="analyze-form">
    <div class="input-row">
      <button type="button" id="clear-btn" title="지우기">&#10005;</button>
      <input type="text" id="field" value="__INITIAL_FIELD__" spellcheck="false" autocomplete="off">
      <button type="submit" id="submit-btn">분석 실행</button>
    </div>
    <p class="example-hint">예시: __EXAMPLE_HINT__</p>
  </form>

  <div id="error-banner"></div>

  <div id="loading">
    <span class="spinner"></span>
    <p>데이터 분석 및 리포트 생성 중...</p>
  </div>

  <main id="result"></main>

  <div id="export-bar">
    <button type="button" id="print-btn">리포트 PDF 저장 / 인쇄</button>
    <button type="button" id="txt-btn">TXT 아카이브 다운로드</button>
    <p class="export-note">* PDF 저장 시 '인쇄' 대화상자에서 대상을 'PDF로 저장'으로 선택해주세요.</p>
  </div>
</div>

<script>
const EXAMPLES = __EXAMPLES_JSON__;
const GENERATION_ERROR = "__ERROR_MESSAGE__";
const SESSION_KEY = "biz_matrix_session_id";

const fieldInput = document.getElementById("field");
const clearBtn = document.getElementById("clear-btn");
const submitBtn = document.getElementById("submit-btn");
const errorBanner = document.getElementById("error-banner");
const loadingBox = document.getElementById("loading");
const resultBox = document.getElementById("result");
const exportBar = document.getElementById("export-bar");

// 셸 상태 (서버의 ShellState와 동일한 전이 규칙)
let focused = false;
let interacted = false;
let loading = false;
let hasResult = false;
let shuffleIndex = 0;
let lastAnalyzed = "";
let lastAnalysis = null;

// 탭 세션 식별자: 최초 접근 시 생성 후 탭 수명 동안 유지
function sessionId() {
  let id = sessionStorage.getItem(SESSION_KEY);
  if (!id) {
    id = "session_" + Date.now() + "_" + Math.random().toString(36).slice(2, 11);
    sessionStorage.setItem(SESSION_KEY, id);
  }
  return id;
}

// 액션 로그: fire-and-forget, 실패는 콘솔로만
function track(actionType, fieldValue) {
  fetch("/api/analytics/track", {
    method: "POST",
    headers: { "Content-Type": "application/json", "x-session-id": sessionId() },
    body: JSON.stringify({
      actionType: actionType,
      fieldValue: fieldValue || null,
      sessionId: sessionId()
    })
  }).catch(function (error) {
    console.error("Failed to track action:", error);
  });
}

function rotationActive() {
  return !interacted && !focused && !loading && !hasResult;
}

setInterval(function () {
  if (!rotationActive()) return;
  shuffleIndex = (shuffleIndex + 1) % EXAMPLES.length;
  fieldInput.value = EXAMPLES[shuffleIndex];
  syncClearButton();
}, __ROTATION_INTERVAL__);

function syncClearButton() {
  clearBtn.style.visibility = fieldInput.value.length > 0 ? "visible" : "hidden";
}

fieldInput.addEventListener("focus", function () {
  focused = true;
  track("input_focus", fieldInput.value);
});
fieldInput.addEventListener("blur", function () {
  focused = false;
});
fieldInput.addEventListener("input", function () {
  interacted = true;
  syncClearButton();
});
clearBtn.addEventListener("click", function () {
  fieldInput.value = "";
  interacted = true;
  syncClearButton();
  track("input_clear", null);
});

document.getElementById("analyze-form").addEventListener("submit", async function (event) {
  event.preventDefault();
  const phrase = fieldInput.value.trim();
  if (!phrase || loading) return;

  loading = true;
  hasResult = false;
  lastAnalyzed = phrase;
  lastAnalysis = null;
  errorBanner.style.display = "none";
  resultBox.innerHTML = "";
  exportBar.style.display = "none";
  loadingBox.style.display = "block";
  submitBtn.disabled = true;
  track("search_execution", phrase);

  try {
    const response = await fetch("/api/analysis/matrix", {
      method: "POST",
      headers: { "Content-Type": "application/json", "x-session-id": sessionId() },
      body: JSON.stringify({ field: phrase })
    });
    const body = await response.json();
    if (!response.ok || !body.isSuccess) throw new Error(body.message || GENERATION_ERROR);

    lastAnalysis = body.result.analysis;
    resultBox.innerHTML = body.result.reportHtml;
    hasResult = true;
    exportBar.style.display = "block";
    track("result_view", phrase);
  } catch (error) {
    console.error(error);
    errorBanner.textContent = GENERATION_ERROR;
    errorBanner.style.display = "block";
  } finally {
    loading = false;
    loadingBox.style.display = "none";
    submitBtn.disabled = false;
  }
});

document.getElementById("print-btn").addEventListener("click", function () {
  track("pdf_export", lastAnalyzed);
  window.print();
});

document.getElementById("txt-btn").addEventListener("click", async function () {
  if (!lastAnalysis) return;
  track("txt_export", lastAnalyzed);
  try {
    const response = await fetch("/api/report/txt", {
      method: "POST",
      headers: { "Content-Type": "application/json", "x-session-id": sessionId() },
      body: JSON.stringify({ field: lastAnalyzed, analysis: lastAnalysis })
    });
    if (!response.ok) throw new Error("export failed: " + response.status);
    const blob = await response.blob();
    const link = document.createElement("a");
    link.href = URL.createObjectURL(blob);
    link.download = "biz-report-" + lastAnalyzed + ".txt";
    link.click();
    URL.revokeObjectURL(link.href);
  } catch (error) {
    console.error(error);
  }
});

syncClearButton();
track("page_visit", null);
</script>
</body>
</html>
"##;
